use leptos::prelude::*;

use crate::content::PROFILE;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="py-8 border-t border-border">
            <div class="container mx-auto px-4">
                <p class="text-muted-foreground text-sm text-center">
                    {format!("© {} {}. All rights reserved.", env!("BUILD_YEAR"), PROFILE.name)}
                </p>
            </div>
        </footer>
    }
}
