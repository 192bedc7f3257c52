use crate::HTMX_PATH;
use maud::{html, Markup};

pub const DEFAULT_INDEX_TITLE: &str = "Scorecard";

#[must_use]
pub fn render_index_template(title: &str) -> Markup {
    html! {
        (maud::DOCTYPE)
        head {
            meta charset="UTF-8";
            meta name="viewport" content="width=device-width, initial-scale=1.0";
            link rel="stylesheet" type="text/css" href="static/styles.css";
            title { (title) }
            script src=(HTMX_PATH) defer {}
        }
        body {
            h1 { (title) }
            nav class="steps" {
                a href="/courses" { "Courses" }
                a href="/players" { "Players" }
                a href="/history" { "History" }
            }
            div id="scorecard" {
                p { "Pick a course and at least two players to start a round." }
            }
        }
    }
}
