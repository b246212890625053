use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::QuizView;

#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();
    let title = ctx.config().window_title.clone();

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }
        document::Title { "{title}" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                QuizView {}
            }
        }
    }
}
