//! HTML page rendering.
//!
//! All pages are compile-time [maud](https://maud.lambda.xyz/) templates:
//! type-safe Rust code with automatic XSS escaping and no template files to
//! ship. The stylesheet and the uses-page markdown are embedded with
//! `include_str!`, so the binary is fully self-contained.
//!
//! ## Pages
//!
//! - **Landing page** (`/`): biography plus the blog-post list. The post
//!   list itself is supplied by the caller — enumerating posts is someone
//!   else's job; this module only renders what it is given.
//! - **Uses page** (`/uses`): hardware/software lists, authored as markdown
//!   and converted with `pulldown-cmark`.
//! - **Not found**: fallback for unknown paths.
//!
//! Every document head carries the social-preview metadata (`og:image`
//! pointing at `/og` with the page title in the query string) that the
//! preview renderer exists to serve.

use maud::{DOCTYPE, Markup, PreEscaped, html};
use pulldown_cmark::{Parser, html as md_html};

use crate::config::SiteConfig;

const CSS: &str = include_str!("../static/style.css");
const USES_MD: &str = include_str!("../content/uses.md");

/// Site display name, also the default preview-card title.
const SITE_TITLE: &str = "</> Andresromero.dev";

/// A blog post link as rendered on the landing page.
///
/// Post enumeration lives outside this crate; the server hands the renderer
/// a fixed slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostLink {
    pub date: &'static str,
    pub title: &'static str,
    pub href: &'static str,
}

/// Posts surfaced on the landing page.
pub const SITE_POSTS: &[PostLink] = &[
    PostLink {
        date: "2025-03-18",
        title: "Shipping Game Services for a Competitive MOBA",
        href: "/blog/shipping-game-services",
    },
    PostLink {
        date: "2024-11-02",
        title: "Load Testing Matchmaking Before Launch Day",
        href: "/blog/load-testing-matchmaking",
    },
    PostLink {
        date: "2024-06-27",
        title: "From Full Stack Developer to Tech Lead",
        href: "/blog/full-stack-to-tech-lead",
    },
];

/// Absolute URL of the preview card for `title`, rooted at the configured
/// base URL.
fn preview_image_url(config: &SiteConfig, title: &str) -> String {
    let query: String = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("title", title)
        .finish();
    format!("{}/og?{}", config.base_url.trim_end_matches('/'), query)
}

/// Renders the base HTML document: head with social-preview metadata,
/// inlined stylesheet, top navigation, and the page content.
fn base_document(config: &SiteConfig, title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                meta property="og:title" content=(title);
                meta property="og:type" content="website";
                meta property="og:image" content=(preview_image_url(config, title));
                meta name="twitter:card" content="summary_large_image";
                style { (PreEscaped(CSS)) }
            }
            body {
                nav.site-nav {
                    a href="/" { "home" }
                    a href="/uses" { "uses" }
                }
                (content)
            }
        }
    }
}

/// Renders the landing page: biography and the supplied post list.
pub fn render_home(config: &SiteConfig, posts: &[PostLink]) -> Markup {
    let content = html! {
        section {
            h1 { (SITE_TITLE) }
            p {
                "Hey, I'm Andrés! I'm a Software Engineer from Costa Rica."
                br; br;
                "I currently work at "
                a href="https://www.lunchboxentertainment.com" target="_blank" rel="noopener noreferrer" {
                    u { "Lunchbox" }
                }
                " where I'm part of the Game Services Team building the future of competitive gaming with "
                a href="https://store.steampowered.com/app/2790090/Sirocco" target="_blank" rel="noopener noreferrer" {
                    u { "Sirocco" }
                }
                " a revolutionary new MOBA."
                br; br;
                "From coding to leading, I've got the full stack covered - take a look at my "
                a href="https://andresromerodev.notion.site/andresromerodev/Andr-s-Romero-1c7e5808a418431b8df0dd4fa63c25ba" target="_blank" rel="noopener noreferrer" {
                    u { "Resume" }
                }
                " and let's discuss that idea you have in mind!"
            }
            hr;
            h2 { "Blog Posts" }
            ul.post-list {
                @for post in posts {
                    li {
                        a href=(post.href) {
                            span.post-date { (post.date) }
                            (post.title)
                        }
                    }
                }
            }
            hr;
        }
    };
    base_document(config, SITE_TITLE, content)
}

/// Renders the uses page from the embedded markdown.
pub fn render_uses(config: &SiteConfig) -> Markup {
    let mut body = String::new();
    md_html::push_html(&mut body, Parser::new(USES_MD));

    let content = html! {
        section {
            h1 { "What I use everyday" }
            (PreEscaped(body))
            hr;
        }
    };
    base_document(config, "What I use everyday", content)
}

/// Renders the 404 page.
pub fn render_not_found(config: &SiteConfig) -> Markup {
    let content = html! {
        section {
            h1 { "404" }
            p { "This page does not exist. " a href="/" { "Go home." } }
        }
    };
    base_document(config, SITE_TITLE, content)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SiteConfig {
        SiteConfig::default()
    }

    #[test]
    fn home_contains_heading_and_bio() {
        let html = render_home(&config(), SITE_POSTS).into_string();
        // Maud escapes the heading's markup characters.
        assert!(html.contains("&lt;/&gt; Andresromero.dev"));
        assert!(html.contains("Software Engineer from Costa Rica"));
        assert!(html.contains("https://www.lunchboxentertainment.com"));
    }

    #[test]
    fn home_lists_supplied_posts() {
        let posts = [PostLink {
            date: "2025-01-01",
            title: "A post",
            href: "/blog/a-post",
        }];
        let html = render_home(&config(), &posts).into_string();
        assert!(html.contains("A post"));
        assert!(html.contains("/blog/a-post"));
    }

    #[test]
    fn head_links_the_preview_image() {
        let html = render_home(&config(), &[]).into_string();
        // Title goes through percent-encoding, then maud attribute escaping.
        assert!(html.contains("https://andresromero.dev/og?title="));
        assert!(html.contains("summary_large_image"));
    }

    #[test]
    fn preview_url_percent_encodes_the_title() {
        let url = preview_image_url(&config(), "</> Andresromero.dev");
        assert_eq!(
            url,
            "https://andresromero.dev/og?title=%3C%2F%3E+Andresromero.dev"
        );
    }

    #[test]
    fn preview_url_tolerates_trailing_slash_in_base() {
        let mut config = config();
        config.base_url = "https://example.com/".to_string();
        assert!(preview_image_url(&config, "x").starts_with("https://example.com/og?"));
    }

    #[test]
    fn uses_page_renders_markdown_lists() {
        let html = render_uses(&config()).into_string();
        assert!(html.contains("What I use everyday"));
        assert!(html.contains("<h2>Hardware</h2>"));
        assert!(html.contains("Keychron C3 Pro Mechanical Keyboard"));
        assert!(html.contains("<li>"));
    }

    #[test]
    fn not_found_links_home() {
        let html = render_not_found(&config()).into_string();
        assert!(html.contains("404"));
        assert!(html.contains("href=\"/\""));
    }
}
