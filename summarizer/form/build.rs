use std::process::Command;

const FORWARDED_VARS: [&str; 2] = ["HUGGINGFACE_API_KEY", "SUMMARIZER_ENDPOINT"];

fn main() {
	println!("cargo:rustc-env=RUST_BACKTRACE=1");

	// A local .env is optional; real environment variables take precedence.
	if let Err(e) = dotenvy::dotenv()
		&& !e.not_found()
	{
		println!("cargo:warning=Failed to load .env: {e}");
	}
	for var in FORWARDED_VARS {
		println!("cargo:rerun-if-env-changed={var}");
		if let Ok(value) = std::env::var(var) {
			println!("cargo:rustc-env={var}={value}");
		}
	}
	if std::env::var(FORWARDED_VARS[0]).is_err() {
		println!("cargo:warning=HUGGINGFACE_API_KEY is not set; the form will refuse to summarize");
	}

	println!("cargo:rerun-if-changed=./input.css");
	println!("cargo:rerun-if-changed=./tailwind.config.js");

	let profile = std::env::var("PROFILE").unwrap_or_else(|_| "debug".to_owned());
	let mut args = vec!["tailwindcss", "-i", "./input.css", "-o", "./assets/tailwind.css"];
	if profile == "release" {
		args.push("--minify");
	}

	match Command::new("npx").args(&args).output() {
		Ok(output) if output.status.success() => {},
		Ok(output) => println!("cargo:warning=Tailwind CSS compilation failed: {}", String::from_utf8_lossy(&output.stderr).trim()),
		Err(e) => println!("cargo:warning=Skipping Tailwind CSS, npx unavailable: {e}"),
	}
}
