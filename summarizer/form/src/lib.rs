use common::{AppError, FormState, HuggingFaceClient, InferenceConfig, MAX_CHARS, MIN_CHARS, Summarize, SummarizerForm};
use dioxus::{
	prelude::*,
	web::{Config, launch::launch_cfg},
};
use dioxus_free_icons::{
	Icon,
	icons::fi_icons::{FiCopy, FiTrash2, FiZap},
};
use tailwind_fuse::tw_merge;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub fn main() {
	dioxus::logger::init(dioxus::logger::tracing::Level::DEBUG).expect("dioxus logger");
	launch_cfg(App, Config::default());
}

fn build_client() -> Result<HuggingFaceClient, AppError> {
	let config = InferenceConfig::from_build_env(option_env!("HUGGINGFACE_API_KEY"), option_env!("SUMMARIZER_ENDPOINT"))?;
	info!("[form] Summarizing through {}", config.endpoint);
	HuggingFaceClient::new(&config)
}

/// Blocking browser notice, mirrored to the log.
fn notify(message: &str) {
	warn!("[form] {message}");
	if let Some(window) = web_sys::window()
		&& let Err(e) = window.alert_with_message(message)
	{
		error!("[form] Failed to show notice: {e:?}");
	}
}

#[component]
fn App() -> Element {
	let mut form = use_signal(SummarizerForm::new);
	let client = use_hook(|| build_client().inspect_err(|e| error!("[form] Summarizer unavailable: {e}")));

	let submit_client = client.clone();
	let on_summarize_click = move |_| {
		let client = submit_client.clone();
		async move {
			let Ok(client) = client else { return };
			let started = form.write().begin_submit();
			let ticket = match started {
				Ok(ticket) => ticket,
				Err(e) => return notify(&e.to_string()),
			};
			let outcome = client.summarize(ticket.text()).await;
			form.write().settle(ticket, outcome);
		}
	};

	let snapshot = form.read().clone();
	let input = snapshot.input().to_owned();
	let char_count = snapshot.char_count();
	let counter_class = tw_merge!("text-sm font-semibold", if snapshot.is_valid() { "text-green-600" } else { "text-red-600" });

	rsx! {
		div { class: "min-h-screen w-full bg-gradient-to-br from-purple-100 via-white to-orange-100 text-gray-900",
			header { class: "bg-purple-700 shadow-lg",
				h1 { class: "text-3xl text-white font-bold text-center py-6 tracking-wide",
					"Simplify the Complex: A Summarizer's Hub"
				}
			}
			div { class: "text-center mt-8 px-4",
				p { class: "text-xl", "Paste your lengthy text below, and AI will simplify it for you." }
				p { class: "text-lg mt-2 text-purple-800 font-semibold",
					"Supports {MIN_CHARS} to {MAX_CHARS} characters"
				}
			}
			div { class: "flex flex-col md:flex-row justify-center items-start gap-6 mt-10 px-6 md:px-12",
				div { class: "w-full md:w-1/2 bg-white border border-purple-300 rounded-xl shadow-md p-6 space-y-4",
					textarea {
						class: "w-full h-64 p-4 border rounded-lg resize-none focus:outline-none focus:ring-2 focus:ring-purple-500 text-lg",
						placeholder: "Paste your text here...",
						value: "{input}",
						oninput: move |evt| form.write().update_input(evt.value()),
					}
					div { class: "flex justify-end",
						span { class: "{counter_class}", "{char_count}/{MAX_CHARS}" }
					}
				}
				div { class: "relative w-full md:w-1/2 min-h-[120px] bg-white border border-orange-300 rounded-xl shadow-md p-6",
					h2 { class: "text-lg font-semibold mb-2 text-orange-800", "Summary:" }
					match (&client, snapshot.state()) {
						(Err(e), _) => rsx! {
							p { class: "text-red-600 font-medium", "{e}" }
						},
						(Ok(_), FormState::Idle) => rsx! {
							p { class: "text-gray-500", "Your summary will appear here." }
						},
						(Ok(_), FormState::Submitting) => rsx! {
							div { class: "flex items-center justify-center py-8",
								div { class: "animate-spin rounded-full h-8 w-8 border-b-2 border-orange-600" }
							}
						},
						(Ok(_), FormState::Succeeded(summary)) => rsx! {
							SummaryView { summary: summary.clone() }
						},
						(Ok(_), FormState::Failed(message)) => rsx! {
							p { class: "text-red-600 font-medium whitespace-pre-line", "{message}" }
						},
					}
				}
			}
			div { class: "flex justify-center mt-8 space-x-4",
				if snapshot.is_submitting() {
					p { class: "text-xl font-semibold text-orange-600 animate-pulse", "Generating Summary..." }
				} else {
					button {
						class: "flex items-center gap-2 bg-orange-500 hover:bg-orange-600 text-white font-semibold px-6 py-2 rounded-lg shadow disabled:bg-gray-400 disabled:cursor-not-allowed",
						disabled: client.is_err(),
						onclick: on_summarize_click,
						Icon { icon: FiZap, width: 16, height: 16 }
						"Summarize"
					}
					button {
						class: "flex items-center gap-2 bg-purple-500 hover:bg-purple-700 text-white font-semibold px-6 py-2 rounded-lg shadow",
						onclick: move |_| form.write().reset(),
						Icon { icon: FiTrash2, width: 16, height: 16 }
						"Clear"
					}
				}
			}
		}
	}
}

#[component]
fn SummaryView(summary: String) -> Element {
	let mut copy_text = use_signal(|| "Copy".to_owned());
	let to_copy = summary.clone();
	rsx! {
		p { class: "text-gray-700 whitespace-pre-line", "{summary}" }
		button {
			class: "absolute top-4 right-4 flex items-center gap-1 px-2 py-1 text-xs font-medium text-gray-600 bg-gray-200 hover:bg-gray-300 rounded-md",
			onclick: move |_| {
				let summary = to_copy.clone();
				async move {
					let Some(clipboard) = web_sys::window().map(|w| w.navigator().clipboard()) else { return };
					let copied = wasm_bindgen_futures::JsFuture::from(clipboard.write_text(&summary)).await;
					let label = if copied.is_ok() { "Copied!" } else { "Failed" };
					copy_text.set(label.to_owned());
				}
			},
			Icon { icon: FiCopy, width: 12, height: 12 }
			"{copy_text}"
		}
	}
}
