//! Server-rendered HTML for the login screen and the application shell.
//!
//! Markup is structural only; styling is left to the client.

use ammonia::clean_text;

use crate::{
    domain::{greeting, Identity, Preferences, Theme},
    i18n::Translations,
    utils::date_format::LocalClock,
};

use super::exercise::exercise_tabs;

fn toggles(preferences: &Preferences, t: &Translations) -> String {
    let theme_label = match preferences.theme {
        Theme::Light => t.theme.dark,
        Theme::Dark => t.theme.light,
    };
    format!(
        r#"<div class="toggles">
            <button type="button" data-action="/preferences/language/toggle" title="{lang_title}">{next_lang}</button>
            <button type="button" data-action="/preferences/theme/toggle">{theme_label}</button>
        </div>"#,
        lang_title = clean_text(t.language.toggle),
        next_lang = preferences.language.toggled().to_string().to_uppercase(),
        theme_label = clean_text(theme_label),
    )
}

fn document(preferences: &Preferences, title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="{lang}" data-theme="{theme}">
    <head>
        <meta charset="utf-8" />
        <meta name="viewport" content="width=device-width, initial-scale=1" />
        <title>{title}</title>
    </head>
    <body>
{body}
    </body>
</html>
"#,
        lang = preferences.language,
        theme = preferences.theme,
        title = clean_text(title),
    )
}

pub fn login_page(preferences: &Preferences, next: Option<&str>) -> String {
    let t = preferences.translations();
    let action = match next {
        Some(next) => {
            let next: String = url::form_urlencoded::byte_serialize(next.as_bytes()).collect();
            format!("/login?next={next}")
        }
        None => "/login".to_string(),
    };

    let body = format!(
        r#"        {toggles}
        <main class="login">
            <p class="subtitle">{subtitle}</p>
            <h1>{app_name}</h1>
            <p class="tagline">{tagline}</p>
            <form action="{action}" method="post">
                <button type="submit">{sign_in}</button>
            </form>
            <p class="session-info">{session_info}</p>
        </main>"#,
        toggles = toggles(preferences, t),
        subtitle = clean_text(t.auth.subtitle),
        app_name = clean_text(t.auth.app_name),
        tagline = clean_text(t.auth.tagline),
        action = clean_text(&action),
        sign_in = clean_text(t.auth.sign_in),
        session_info = clean_text(t.auth.session_info),
    );

    document(preferences, t.auth.app_name, &body)
}

pub fn shell_page(identity: &Identity, preferences: &Preferences, clock: &LocalClock) -> String {
    let t = preferences.translations();

    let avatar = identity
        .avatar_url
        .as_deref()
        .map(|url| format!(r#"<img class="avatar" src="{}" alt="" />"#, clean_text(url)))
        .unwrap_or_default();

    let tabs: String = exercise_tabs(t)
        .iter()
        .map(|tab| {
            format!(
                r##"
                <a class="tab" href="#{key}" data-exercise="{key}">{icon} {name}</a>"##,
                key = tab.key,
                icon = tab.icon,
                name = clean_text(tab.name),
            )
        })
        .collect();

    let body = format!(
        r#"        <header>
            <div class="brand">
                <h1>{app_name}</h1>
                <p class="subtitle">{subtitle}</p>
            </div>
            <p class="greeting">{greeting}</p>
            {avatar}
            {toggles}
            <form action="/logout" method="post"><button type="submit">{logout}</button></form>
        </header>
        <nav>{tabs}
        </nav>
        <main id="exercise"></main>
        <footer class="marquee">{marquee} · {no_hurry}</footer>"#,
        app_name = clean_text(t.auth.app_name),
        subtitle = clean_text(t.auth.subtitle),
        greeting = clean_text(&greeting(identity, clock, t)),
        toggles = toggles(preferences, t),
        logout = clean_text(t.nav.logout),
        marquee = clean_text(t.marquee.journal),
        no_hurry = clean_text(t.messages.no_hurry),
    );

    document(preferences, t.auth.app_name, &body)
}
