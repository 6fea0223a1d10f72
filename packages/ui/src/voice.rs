use dioxus::prelude::*;
use store::voice::VoiceCommands;

use crate::icons::FaMicrophone;
use crate::interop;
use crate::{notify, use_notices, Icon, NoticeLevel};

/// Listens for one phrase and reports the matching path. The app decides how
/// to navigate.
#[component]
pub fn VoiceCommandButton(on_command: EventHandler<String>) -> Element {
    let mut notices = use_notices();
    let mut listening = use_signal(|| false);
    let commands = use_hook(VoiceCommands::default);

    let onclick = move |_| {
        let commands = commands.clone();
        async move {
            if listening() {
                return;
            }
            listening.set(true);
            let heard = interop::listen_once().await;
            listening.set(false);
            match heard {
                Ok(transcript) => match commands.resolve(&transcript) {
                    Some(path) => {
                        tracing::info!("voice command {transcript:?} -> {path}");
                        on_command.call(path.to_string());
                    }
                    None => notify(
                        &mut notices,
                        NoticeLevel::Info,
                        &format!("Sorry, I didn't understand \"{transcript}\""),
                    ),
                },
                Err(e) => notify(&mut notices, NoticeLevel::Error, &e),
            }
        }
    };

    rsx! {
        button {
            class: if listening() { "voice-button listening" } else { "voice-button" },
            title: "Voice navigation",
            onclick: onclick,
            Icon { icon: FaMicrophone, width: 16, height: 16 }
        }
    }
}
