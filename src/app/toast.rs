use std::time::Duration;

use leptos::prelude::*;

use crate::contact::{Notice, Tone};

const TOAST_LIFETIME: Duration = Duration::from_secs(5);

/// Transient notifications shared through context.
#[derive(Debug, Clone, Copy)]
pub struct Toasts {
    items: RwSignal<Vec<(u64, Notice)>>,
    next_id: StoredValue<u64>,
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new()
    }
}

impl Toasts {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    pub fn push(&self, notice: Notice) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.items.update(|items| items.push((id, notice)));

        let toasts = *self;
        set_timeout(move || toasts.dismiss(id), TOAST_LIFETIME);
    }

    pub fn dismiss(&self, id: u64) {
        self.items.update(|items| items.retain(|(i, _)| *i != id));
    }
}

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<Toasts>();

    view! {
        <div class="fixed bottom-6 right-6 z-[90] flex flex-col gap-3 w-80 max-w-[calc(100vw-3rem)]">
            <For
                each=move || toasts.items.get()
                key=|(id, _)| *id
                children=move |(id, notice)| {
                    let accent = match notice.tone {
                        Tone::Success => "border-green-500/50",
                        Tone::Error => "border-red-500/50",
                    };
                    view! {
                        <div
                            role="status"
                            class=format!("glass p-4 border-l-4 cursor-pointer animate-toast-in {accent}")
                            on:click=move |_| toasts.dismiss(id)
                        >
                            <p class="font-semibold">{notice.title}</p>
                            <p class="text-sm text-muted-foreground">{notice.description}</p>
                        </div>
                    }
                }
            />
        </div>
    }
}
