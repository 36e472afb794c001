//! Server-side HTML rendering of the site.
//!
//! Every page is wrapped in the same shell: header with navigation and the
//! language switch, the page body, and the footer. All dictionary and config
//! text goes through [`escape_html`].

use crate::config::Config;
use crate::i18n::{LocaleContext, Record};
use crate::site::{ContactForm, Page};
use chrono::Datelike;

/// Result banner shown above the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactNotice {
    Sent,
    Invalid,
}

/// State of the contact page: current field values and an optional banner.
#[derive(Debug, Clone, Default)]
pub struct ContactView {
    pub form: ContactForm,
    pub notice: Option<ContactNotice>,
}

/// Escape text for HTML element content and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render one of the site's pages.
pub fn render_page(ctx: &LocaleContext, config: &Config, page: Page) -> String {
    let body = match page {
        Page::Contact => return render_contact(ctx, config, &ContactView::default()),
        Page::Home => home_body(ctx, config),
        Page::About => about_body(ctx),
        Page::Services => services_body(ctx),
        Page::Products => products_body(ctx, config),
        Page::ProductsSimple => products_simple_body(ctx),
    };
    layout(ctx, config, page.path(), &ctx.t(&page.title_key()), &body)
}

/// Render the contact page with the given form state.
pub fn render_contact(ctx: &LocaleContext, config: &Config, view: &ContactView) -> String {
    let body = contact_body(ctx, config, view);
    layout(ctx, config, Page::Contact.path(), &ctx.t("contact.title"), &body)
}

/// Render the localized 404 page for `path`.
pub fn render_not_found(ctx: &LocaleContext, config: &Config, path: &str) -> String {
    let body = format!(
        r#"<section class="hero"><div class="container"><h1>{title}</h1><p>{message}</p><a class="button" href="{home}">{back}</a></div></section>"#,
        title = escape_html(&ctx.t("notFound.title")),
        message = escape_html(&ctx.t("notFound.message")),
        home = escape_html(&localized_href(ctx, Page::Home.path())),
        back = escape_html(&ctx.t("notFound.back")),
    );
    layout(ctx, config, path, &ctx.t("notFound.title"), &body)
}

/// Link to `path` that keeps a non-default active locale.
pub fn localized_href(ctx: &LocaleContext, path: &str) -> String {
    let locale = ctx.active_locale();
    if locale.is_default(ctx.registry()) {
        path.to_string()
    } else {
        format!("{}?lang={}", path, locale.code())
    }
}

// ==================== Shell ====================

fn layout(ctx: &LocaleContext, config: &Config, current_path: &str, title: &str, body: &str) -> String {
    let page_title = if title.is_empty() {
        escape_html(&config.company_name)
    } else {
        format!(
            "{} | {}",
            escape_html(title),
            escape_html(&config.company_name)
        )
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{page_title}</title>
</head>
<body>
{header}
<main>
{body}
</main>
{footer}
</body>
</html>
"#,
        lang = escape_html(ctx.active_locale().code()),
        header = header(ctx, config, current_path),
        footer = footer(ctx, config),
    )
}

fn header(ctx: &LocaleContext, config: &Config, current_path: &str) -> String {
    let links: String = Page::NAV
        .iter()
        .map(|page| {
            let class = if page.path() == current_path {
                r#" class="nav-link active" aria-current="page""#
            } else {
                r#" class="nav-link""#
            };
            format!(
                r#"<a href="{}"{}>{}</a>"#,
                escape_html(&localized_href(ctx, page.path())),
                class,
                escape_html(&ctx.t(&page.title_key()))
            )
        })
        .collect();

    let target = ctx.toggle_target();
    format!(
        r#"<header class="site-header">
<nav>
<a class="logo" href="{home}"><img src="/logo_company-name-right-side-of-logo.png" alt="{company}"></a>
<div class="nav-links">{links}</div>
<div class="nav-actions">
<a class="language-button" href="{switch_href}" hreflang="{target}" title="{switch_title}">{target_label}</a>
</div>
</nav>
</header>"#,
        home = escape_html(&localized_href(ctx, Page::Home.path())),
        company = escape_html(&config.company_name),
        switch_href = escape_html(&format!("{}?lang={}", current_path, target.code)),
        target = escape_html(&target.code),
        switch_title = escape_html(&ctx.t("language.switch")),
        target_label = escape_html(&target.code.to_uppercase()),
    )
}

fn footer(ctx: &LocaleContext, config: &Config) -> String {
    let quick_links: String = Page::NAV
        .iter()
        .map(|page| {
            format!(
                r#"<a href="{}">{}</a>"#,
                escape_html(&localized_href(ctx, page.path())),
                escape_html(&ctx.t(&page.title_key()))
            )
        })
        .collect();

    format!(
        r#"<footer class="site-footer">
<div class="footer-content">
<div class="footer-section"><h4>{company}</h4><p>{description}</p><div class="social-links">{social}</div></div>
<div class="footer-section"><h4>{quick_links_title}</h4>{quick_links}</div>
<div class="footer-section"><h4>{contact_title}</h4>{contact}</div>
</div>
<p class="copyright">© {year} {company}. {rights}</p>
</footer>"#,
        company = escape_html(&config.company_name),
        description = escape_html(&ctx.t("about.description")),
        social = social_links(config),
        quick_links_title = escape_html(&ctx.t("footer.quickLinks")),
        contact_title = escape_html(&ctx.t("footer.contact")),
        contact = footer_contact_lines(config),
        year = chrono::Utc::now().year(),
        rights = escape_html(&ctx.t("footer.rights")),
    )
}

fn social_links(config: &Config) -> String {
    [
        (&config.linkedin, "Li"),
        (&config.twitter, "Tw"),
        (&config.facebook, "Fb"),
    ]
    .iter()
    .filter_map(|(url, label)| {
        url.as_ref().map(|url| {
            format!(
                r#"<a href="{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
                escape_html(url),
                label
            )
        })
    })
    .collect()
}

fn footer_contact_lines(config: &Config) -> String {
    let mut lines = String::new();
    if let Some(phone) = &config.phone {
        lines.push_str(&format!(
            r#"<a href="tel:{0}">☎ {0}</a>"#,
            escape_html(phone)
        ));
    }
    if let Some(email) = &config.email {
        lines.push_str(&format!(
            r#"<a href="mailto:{0}">✉ {0}</a>"#,
            escape_html(email)
        ));
    }
    if let Some(whatsapp) = &config.whatsapp {
        lines.push_str(&format!(
            r#"<a href="https://wa.me/{}" target="_blank" rel="noopener noreferrer">◉ WhatsApp</a>"#,
            escape_html(whatsapp)
        ));
    }
    if let Some(address) = &config.address {
        lines.push_str(&format!("<span>⌖ {}</span>", escape_html(address)));
    }
    lines
}

// ==================== Fragments ====================

fn hero(title: &str, subtitle: &str) -> String {
    format!(
        r#"<section class="hero"><div class="container"><h1>{}</h1><p>{}</p></div></section>"#,
        escape_html(title),
        escape_html(subtitle)
    )
}

fn list_items(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("<li>{}</li>", escape_html(item)))
        .collect()
}

fn record_cards(records: &[Record], class: &str, heading: &str) -> String {
    records
        .iter()
        .map(|record| {
            format!(
                r#"<div class="{class}"><{heading}>{}</{heading}><p>{}</p></div>"#,
                escape_html(&record.title),
                escape_html(&record.description),
            )
        })
        .collect()
}

const SERVICES: [(&str, &str); 4] = [
    ("software", "⌨"),
    ("construction", "▲"),
    ("automation", "◆"),
    ("consulting", "●"),
];

const SECTORS: [(&str, &str); 3] = [
    ("construction", "▲"),
    ("software", "◆"),
    ("consulting", "◇"),
];

// ==================== Pages ====================

fn home_body(ctx: &LocaleContext, config: &Config) -> String {
    let services: String = SERVICES
        .iter()
        .map(|(key, _)| {
            format!(
                r#"<div class="service-card"><h3>{}</h3><p>{}</p></div>"#,
                escape_html(&ctx.t(&format!("services.{}.title", key))),
                escape_html(&ctx.t(&format!("services.{}.description", key))),
            )
        })
        .collect();

    format!(
        r#"<section class="hero"><div class="container">
<h1>{title}</h1><p>{subtitle}</p>
<div class="cta"><a class="button" href="{about}">{cta}</a><a class="button secondary" href="{contact}">{contact_us}</a></div>
<img src="/logo_company-name-below-logo.png" alt="{company}">
</div></section>
<section><div class="container"><h2>{services_title}</h2><div class="services-grid">{services}</div></div></section>
<section class="product"><div class="container"><h2>{products_title}</h2>{katip}</div></section>"#,
        title = escape_html(&ctx.t("hero.title")),
        subtitle = escape_html(&ctx.t("hero.subtitle")),
        about = escape_html(&localized_href(ctx, Page::About.path())),
        cta = escape_html(&ctx.t("hero.cta")),
        contact = escape_html(&localized_href(ctx, Page::Contact.path())),
        contact_us = escape_html(&ctx.t("hero.contactUs")),
        company = escape_html(&config.company_name),
        services_title = escape_html(&ctx.t("services.title")),
        products_title = escape_html(&ctx.t("products.title")),
        katip = katip_summary(ctx, config),
    )
}

fn katip_summary(ctx: &LocaleContext, config: &Config) -> String {
    format!(
        r#"<div class="product-card"><h3>{}</h3><p>{}</p><h4>{}</h4><ul>{}</ul>{}</div>"#,
        escape_html(&ctx.t("products.katip.title")),
        escape_html(&ctx.t("products.katip.description")),
        escape_html(&ctx.t("products.katip.features.title")),
        list_items(&ctx.list("products.katip.features.list")),
        katip_visit(ctx, config),
    )
}

fn katip_visit(ctx: &LocaleContext, config: &Config) -> String {
    match &config.katip_url {
        Some(url) => format!(
            r#"<a class="button" href="{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
            escape_html(url),
            escape_html(&ctx.t("products.katip.visit"))
        ),
        None => String::new(),
    }
}

fn about_body(ctx: &LocaleContext) -> String {
    format!(
        r#"{hero}
<section><div class="container"><h2>{title}</h2><p>{description}</p></div></section>
<section><div class="container mission-vision">
<div class="card"><h3>{mission}</h3><p>{mission_text}</p></div>
<div class="card"><h3>{vision}</h3><p>{vision_text}</p></div>
</div></section>
<section class="stats"><div class="container"><h2>{stats_title}</h2><div class="stats-grid">{stats}</div></div></section>
<section><div class="container"><h2>{values}</h2><p>{values_text}</p><div class="values-grid">{values_list}</div></div></section>"#,
        hero = hero(&ctx.t("about.title"), &ctx.t("about.description")),
        title = escape_html(&ctx.t("about.title")),
        description = escape_html(&ctx.t("about.description")),
        mission = escape_html(&ctx.t("about.mission")),
        mission_text = escape_html(&ctx.t("about.missionText")),
        vision = escape_html(&ctx.t("about.vision")),
        vision_text = escape_html(&ctx.t("about.visionText")),
        stats_title = escape_html(&ctx.t("about.statsTitle")),
        stats = record_cards(&ctx.records("about.stats"), "stat-card", "h3"),
        values = escape_html(&ctx.t("about.values")),
        values_text = escape_html(&ctx.t("about.valuesText")),
        values_list = record_cards(&ctx.records("about.valuesList"), "value-card", "h3"),
    )
}

fn services_body(ctx: &LocaleContext) -> String {
    let contact = escape_html(&localized_href(ctx, Page::Contact.path()));
    let contact_button = escape_html(&ctx.t("services.contactButton"));

    let cards: String = SERVICES
        .iter()
        .map(|(key, icon)| {
            format!(
                r#"<div class="service-card"><div class="service-icon">{icon}</div><h3>{}</h3><p>{}</p><ul>{}</ul><a class="button" href="{contact}">{contact_button}</a></div>"#,
                escape_html(&ctx.t(&format!("services.{}.title", key))),
                escape_html(&ctx.t(&format!("services.{}.description", key))),
                list_items(&ctx.list(&format!("services.{}.features", key))),
            )
        })
        .collect();

    let steps: String = ctx
        .records("services.process.steps")
        .iter()
        .enumerate()
        .map(|(idx, step)| {
            format!(
                r#"<div class="process-step"><div class="step-number">{}</div><h4>{}</h4><p>{}</p></div>"#,
                idx + 1,
                escape_html(&step.title),
                escape_html(&step.description),
            )
        })
        .collect();

    format!(
        r#"{hero}
<section><div class="container"><h2>{section_title}</h2><p>{section_subtitle}</p><div class="services-grid">{cards}</div></div></section>
<section class="process"><div class="container"><h2>{process_title}</h2><p>{process_subtitle}</p><div class="process-grid">{steps}</div></div></section>"#,
        hero = hero(&ctx.t("services.title"), &ctx.t("services.subtitle")),
        section_title = escape_html(&ctx.t("services.sectionTitle")),
        section_subtitle = escape_html(&ctx.t("services.sectionSubtitle")),
        process_title = escape_html(&ctx.t("services.process.title")),
        process_subtitle = escape_html(&ctx.t("services.process.subtitle")),
    )
}

fn products_body(ctx: &LocaleContext, config: &Config) -> String {
    let sectors: String = SECTORS
        .iter()
        .map(|(key, icon)| {
            format!(
                r#"<div class="sector-card"><div class="sector-icon">{}</div><h4>{}</h4></div>"#,
                icon,
                escape_html(&ctx.t(&format!("sectors.{}", key)))
            )
        })
        .collect();

    format!(
        r#"{hero}
<section class="product"><div class="container"><div class="product-card">
<div class="product-header"><h3>{title}</h3><p>{description}</p></div>
<div class="product-grid">
<div class="features-section"><h3>{features_title}</h3><ul>{features}</ul></div>
<div class="benefits-section"><h3>{benefits_title}</h3>{benefits}</div>
</div>
{visit}
</div></div></section>
<section class="sectors"><div class="container"><h2>{sectors_title}</h2><div class="sectors-grid">{sectors}</div></div></section>"#,
        hero = hero(&ctx.t("products.title"), &ctx.t("products.subtitle")),
        title = escape_html(&ctx.t("products.katip.title")),
        description = escape_html(&ctx.t("products.katip.description")),
        features_title = escape_html(&ctx.t("products.katip.features.title")),
        features = list_items(&ctx.list("products.katip.features.list")),
        benefits_title = escape_html(&ctx.t("products.katip.benefits.title")),
        benefits = record_cards(&ctx.records("products.katip.benefits.list"), "benefit-card", "h4"),
        visit = katip_visit(ctx, config),
        sectors_title = escape_html(&ctx.t("products.sectors.title")),
    )
}

fn products_simple_body(ctx: &LocaleContext) -> String {
    format!(
        r#"<section><div class="container"><h1>{}</h1>{}</div></section>"#,
        escape_html(&ctx.t("productsSimple.title")),
        record_cards(&ctx.records("productsSimple.items"), "product-card", "h3"),
    )
}

fn contact_body(ctx: &LocaleContext, config: &Config, view: &ContactView) -> String {
    let notice = match view.notice {
        Some(ContactNotice::Sent) => format!(
            r#"<p class="notice success" role="status">{}</p>"#,
            escape_html(&ctx.t("contact.form.success"))
        ),
        Some(ContactNotice::Invalid) => format!(
            r#"<p class="notice error" role="alert">{}</p>"#,
            escape_html(&ctx.t("contact.form.invalid"))
        ),
        None => String::new(),
    };

    let form = &view.form;
    let field = |name: &str, kind: &str, value: &str, required: bool| {
        format!(
            r#"<div class="form-group"><label for="{name}">{label}</label><input id="{name}" name="{name}" type="{kind}" value="{value}"{required}></div>"#,
            label = escape_html(&ctx.t(&format!("contact.form.{}", name))),
            value = escape_html(value),
            required = if required { " required" } else { "" },
        )
    };

    let mut info = String::new();
    if let Some(phone) = &config.phone {
        info.push_str(&format!(
            r#"<div class="contact-card"><h4>☎ {}</h4><a href="tel:{1}">{1}</a></div>"#,
            escape_html(&ctx.t("contact.info.phone")),
            escape_html(phone)
        ));
    }
    if let Some(email) = &config.email {
        info.push_str(&format!(
            r#"<div class="contact-card"><h4>✉ {}</h4><a href="mailto:{1}">{1}</a></div>"#,
            escape_html(&ctx.t("contact.info.email")),
            escape_html(email)
        ));
    }
    if let Some(whatsapp) = &config.whatsapp {
        info.push_str(&format!(
            r#"<div class="contact-card"><h4>◉ WhatsApp</h4><a href="https://wa.me/{}" target="_blank" rel="noopener noreferrer">{}</a></div>"#,
            escape_html(whatsapp),
            escape_html(&ctx.t("contact.info.whatsapp"))
        ));
    }
    if let Some(address) = &config.address {
        info.push_str(&format!(
            r#"<div class="contact-card"><h4>⌖ {}</h4><p>{}</p></div>"#,
            escape_html(&ctx.t("contact.info.address")),
            escape_html(address)
        ));
    }

    format!(
        r#"{hero}
<section><div class="container contact-grid">
<form class="contact-form" method="post" action="{action}">
<h3>{heading}</h3>
{notice}
{name}{email}{phone}{subject}
<div class="form-group"><label for="message">{message_label}</label><textarea id="message" name="message" required>{message}</textarea></div>
<button type="submit">{send}</button>
</form>
<div class="contact-info"><h3>{info_title}</h3><p>{info_text}</p>{info}<div class="social-links">{social}</div></div>
</div></section>"#,
        hero = hero(&ctx.t("contact.title"), &ctx.t("contact.subtitle")),
        action = escape_html(&localized_href(ctx, Page::Contact.path())),
        heading = escape_html(&ctx.t("contact.form.heading")),
        name = field("name", "text", &form.name, true),
        email = field("email", "email", &form.email, true),
        phone = field("phone", "tel", &form.phone, false),
        subject = field("subject", "text", &form.subject, true),
        message_label = escape_html(&ctx.t("contact.form.message")),
        message = escape_html(&form.message),
        send = escape_html(&ctx.t("contact.form.send")),
        info_title = escape_html(&ctx.t("contact.info.title")),
        info_text = escape_html(&ctx.t("contact.info.text")),
        social = social_links(config),
    )
}
