use maud::{html, Markup};

pub mod error;

pub use error::html_error_response;

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        section class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}

/// Button that reloads the listings feed.
pub fn refresh_button() -> Markup {
    html! {
        form action="/refresh" method="post" class="inline" {
            button type="submit" class="btn" { "Refresh" }
        }
    }
}
