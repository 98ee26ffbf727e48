use maud::{html, Markup, DOCTYPE};

const STYLE: &str = "
body { font-family: system-ui, sans-serif; margin: 0 auto; max-width: 1200px; padding: 0 1rem; }
header { display: flex; align-items: center; justify-content: space-between; padding: 0.75rem 0; }
table { border-collapse: collapse; width: 100%; }
th, td { padding: 0.35rem 0.6rem; border-bottom: 1px solid #ddd; text-align: left; }
.num { text-align: right; }
th a, td a { color: inherit; text-decoration: none; }
tr.listing-row:hover { background: rgba(0, 0, 0, 0.04); }
dialog.detail { position: fixed; top: 5%; max-height: 90%; width: 400px; overflow: auto; }
.inline { display: inline; }
";

/// Page shell. `refresh_secs` asks the browser to reload the page, which the
/// listings page uses while the feed is still loading.
pub fn desktop_layout(title: &str, refresh_secs: Option<u32>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                @if let Some(secs) = refresh_secs {
                    meta http-equiv="refresh" content=(secs);
                }
                title { (title) }
                style { (STYLE) }
            }
            body {
              header {
                  svg
                      xmlns="http://www.w3.org/2000/svg"
                      width="24"
                      height="24"
                      viewBox="0 0 24 24"
                      fill="none"
                      stroke="#524ed2"
                      stroke-width="2"
                      stroke-linecap="round"
                      stroke-linejoin="round"
                      class="icon icon-tabler icon-tabler-home"
                  {
                      path stroke="none" d="M0 0h24v24H0z" fill="none" {}
                      path d="M5 12l-2 0l9 -9l9 9l-2 0" {}
                      path d="M5 12v7a2 2 0 0 0 2 2h10a2 2 0 0 0 2 -2v-7" {}
                      path d="M9 21v-6a2 2 0 0 1 2 -2h2a2 2 0 0 1 2 2v6" {}
                  }
                  h3 { "Listings Dashboard" }
                  nav {
                      a href="/" { "Listings" }
                      " · "
                      a href="/api/listings" { "JSON" }
                  }
              }
                main { (content) }
            }
        }
    }
}
