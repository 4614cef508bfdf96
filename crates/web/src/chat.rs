use std::time::Duration;

use leptos::prelude::*;
use maison::chat::{Author, HOLD_THRESHOLD, PendingReply, VoiceHold};

use crate::context::{AppContext, use_app};

/// Time since page load; only differences between two readings matter.
fn monotonic_now() -> Duration {
    let elapsed_ms = web_sys::window()
        .and_then(|window| window.performance())
        .map_or(0.0, |performance| performance.now());

    Duration::from_secs_f64(elapsed_ms.max(0.0) / 1_000.0)
}

/// Deliver a bot reply once its timer fires. The caller does not wait for it.
fn schedule_reply(app: AppContext, reply: PendingReply) {
    let delay = reply.delay;

    set_timeout(
        move || {
            app.chat.update(|chat| {
                chat.deliver(reply);
            });
        },
        delay,
    );
}

/// Whether a hold that is still in progress has become a recording. A signal disposed by an
/// unmounted button reads as no recording.
fn still_recording(hold: RwSignal<VoiceHold>, now: Duration) -> bool {
    hold.try_with_untracked(|hold| hold.is_recording(now)).unwrap_or(false)
}

fn send_text(app: AppContext, draft: RwSignal<String>) {
    let text = draft.get_untracked();
    let mut reply = None;

    app.language.with_untracked(|store| {
        app.chat
            .update(|chat| reply = chat.submit(&text, store.catalog()));
    });

    if let Some(reply) = reply {
        draft.set(String::new());
        schedule_reply(app, reply);
    }
}

fn send_voice(app: AppContext) {
    let mut reply = None;

    app.language.with_untracked(|store| {
        app.chat
            .update(|chat| reply = Some(chat.submit_voice(store.catalog())));
    });

    if let Some(reply) = reply {
        schedule_reply(app, reply);
    }
}

#[component]
pub(crate) fn ChatScreen() -> impl IntoView {
    let app = use_app();
    let draft = RwSignal::new(String::new());

    view! {
        <section class="screen chat-screen">
            <header class="screen-header">
                <h1 class="screen-title">"La Maison"</h1>
                <span class="chat-live">{move || app.text(|catalog| &catalog.chat.live)}</span>
            </header>
            <ol class="chat-messages">
                {move || {
                    app.chat
                        .with(|chat| {
                            chat.messages()
                                .iter()
                                .map(|message| {
                                    let bubble = match message.author {
                                        Author::User => "chat-bubble chat-bubble-user",
                                        Author::Bot => "chat-bubble chat-bubble-bot",
                                    };

                                    view! { <li class=bubble>{message.text.clone()}</li> }
                                })
                                .collect_view()
                        })
                }}
            </ol>
            <form
                class="chat-composer"
                on:submit=move |event| {
                    event.prevent_default();
                    send_text(app, draft);
                }
            >
                <input
                    type="text"
                    class="chat-input"
                    placeholder=move || app.text(|catalog| &catalog.chat.placeholder)
                    prop:value=move || draft.get()
                    on:input=move |event| draft.set(event_target_value(&event))
                />
                <MicButton />
            </form>
        </section>
    }
}

#[component]
fn MicButton() -> impl IntoView {
    let app = use_app();
    let hold = RwSignal::new(VoiceHold::default());
    let recording = RwSignal::new(false);

    let release = move || {
        let mut finished = false;

        hold.update(|hold| finished = hold.release(monotonic_now()));
        recording.set(false);

        if finished {
            send_voice(app);
        }
    };

    view! {
        <button
            type="button"
            class="icon-button chat-mic"
            class:chat-mic-recording=move || recording.get()
            aria-label="Hold to record"
            on:pointerdown=move |_| {
                hold.update(|hold| hold.press(monotonic_now()));
                set_timeout(
                    move || {
                        if still_recording(hold, monotonic_now()) {
                            recording.set(true);
                        }
                    },
                    HOLD_THRESHOLD,
                );
            }
            on:pointerup=move |_| release()
            on:pointerleave=move |_| release()
        >
            "🎤"
        </button>
    }
}
