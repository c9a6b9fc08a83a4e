//! Landing page.

use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="page page--home">
            <h1>"Welcome Home!"</h1>
            <p>"Find movies to watch with your friends."</p>
        </section>
    }
}
