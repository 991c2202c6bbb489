use crate::domain::ViewMode;
use maud::{html, Markup, DOCTYPE};

pub fn desktop_layout(title: &str, active: ViewMode, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " · Irish Property Insights" }
                link rel="stylesheet" href="/static/main.css";
            }
            body {
                header class="site-header" {
                    div class="brand" {
                        svg
                            xmlns="http://www.w3.org/2000/svg"
                            width="24"
                            height="24"
                            viewBox="0 0 24 24"
                            fill="none"
                            stroke="#ffffff"
                            stroke-width="2"
                            stroke-linecap="round"
                            stroke-linejoin="round"
                            class="brand-icon"
                        {
                            path stroke="none" d="M0 0h24v24H0z" fill="none" {}
                            path d="M5 12l-2 0l9 -9l9 9l-2 0" {}
                            path d="M5 12v7a2 2 0 0 0 2 2h10a2 2 0 0 0 2 -2v-7" {}
                            path d="M9 21v-6a2 2 0 0 1 2 -2h2a2 2 0 0 1 2 2v6" {}
                        }
                        div {
                            h1 { "Irish Property Insights" }
                            p class="tagline" { "Powered by Property Price Register Data" }
                        }
                    }
                    nav class="view-switch" {
                        @for view in ViewMode::ALL {
                            a href=(format!("/view/{}", view.as_str()))
                                class=(if view == active { "tab active" } else { "tab" })
                                aria-current=[(view == active).then_some("page")]
                            { (view.label()) }
                        }
                    }
                }
                main class="container" {
                    (content)
                }
            }
        }
    }
}
