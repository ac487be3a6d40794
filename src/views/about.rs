use crate::Route;
use crate::components::{Hero, Reveal};
use crate::data::blog_posts;
use dioxus::prelude::*;

const VALUES: &[(&str, &str)] = &[
    ("Curiosity", "We ask why before we ask how."),
    ("Craft", "Kerning, cutter guides and colour proofs all get the same care."),
    ("Candour", "Honest feedback, early and often."),
];

#[component]
pub fn About() -> Element {
    let posts: Vec<_> = blog_posts()
        .into_iter()
        .map(|post| {
            let date = post.published_on.format("%d %b %Y").to_string();
            (post, date)
        })
        .collect();

    rsx! {
        Hero {
            eyebrow: "About us",
            title: String::from("A studio built around stories."),
            subtitle: "Fynaro started in 2016 as two designers and a borrowed printer in Yaba.",
            Link { to: Route::Contact {}, class: "button button-primary", "Work with us" }
        }

        Reveal { class: "section about-story",
            h2 { "Our story" }
            p {
                "Today we are a team of strategists, designers and print specialists helping "
                "founders and marketing teams turn ideas into brands that hold up on the shelf, "
                "on the street and on screen."
            }
        }

        Reveal { class: "section about-values", delay_ms: 100,
            h2 { "What we value" }
            div { class: "card-grid",
                for (name , body) in VALUES.iter() {
                    div { key: "{name}", class: "card",
                        h3 { "{name}" }
                        p { "{body}" }
                    }
                }
            }
        }

        Reveal { class: "section about-journal", delay_ms: 200,
            h2 { "From the journal" }
            for (post , date) in posts {
                article { key: "{post.id}", id: "{post.slug}", class: "journal-post",
                    h3 { "{post.title}" }
                    p { class: "journal-meta",
                        "{post.author} · {date}"
                    }
                    p { "{post.excerpt}" }
                }
            }
        }
    }
}
