//! Text bundles.

use crate::config::Language;

pub struct Texts {
    pub nav_home: &'static str,
    pub nav_code: &'static str,
    pub nav_games: &'static str,
    pub nav_media: &'static str,
    pub nav_about: &'static str,
    pub nav_docs: &'static str,

    pub home_greeting: &'static str,
    pub home_subtitle: &'static str,
    pub home_intro: &'static str,
    pub home_cta: &'static str,

    pub code_title: &'static str,
    pub code_loading: &'static str,
    pub code_empty: &'static str,
    pub code_stars: &'static str,
    pub code_no_description: &'static str,

    pub construction_title: &'static str,
    pub construction_body: &'static str,

    pub about_title: &'static str,
    pub about_body: &'static [&'static str],

    pub docs_title: &'static str,
    pub docs_intro: &'static str,
    pub docs_unknown_topic: &'static str,

    pub error_title: &'static str,
    pub error_unknown: &'static str,
    pub error_go_home: &'static str,

    pub footer: &'static str,
}

pub static EN: Texts = Texts {
    nav_home: "Home",
    nav_code: "Code",
    nav_games: "Games",
    nav_media: "Media",
    nav_about: "About",
    nav_docs: "Docs",

    home_greeting: "Hi, I'm akrck02",
    home_subtitle: "Software developer",
    home_intro: "I build tools, libraries and the occasional game. Have a look at what I'm working on.",
    home_cta: "See my code",

    code_title: "Projects",
    code_loading: "Loading repositories...",
    code_empty: "No public repositories yet.",
    code_stars: "stars",
    code_no_description: "No description",

    construction_title: "Under construction",
    construction_body: "This section is not ready yet. Come back soon!",

    about_title: "About me",
    about_body: &[
        "I'm a developer who enjoys building things from scratch.",
        "Most of my work is open source and lives on GitHub.",
    ],

    docs_title: "Documentation",
    docs_intro: "Notes and guides for my projects.",
    docs_unknown_topic: "There is no documentation for this topic.",

    error_title: "Error",
    error_unknown: "Unknown error",
    error_go_home: "Go home",

    footer: "Made with Rust",
};

pub static ES: Texts = Texts {
    nav_home: "Inicio",
    nav_code: "Código",
    nav_games: "Juegos",
    nav_media: "Multimedia",
    nav_about: "Sobre mí",
    nav_docs: "Documentación",

    home_greeting: "Hola, soy akrck02",
    home_subtitle: "Desarrollador de software",
    home_intro: "Hago herramientas, librerías y algún que otro juego. Echa un vistazo a lo que estoy haciendo.",
    home_cta: "Ver mi código",

    code_title: "Proyectos",
    code_loading: "Cargando repositorios...",
    code_empty: "Todavía no hay repositorios públicos.",
    code_stars: "estrellas",
    code_no_description: "Sin descripción",

    construction_title: "En construcción",
    construction_body: "Esta sección aún no está lista. ¡Vuelve pronto!",

    about_title: "Sobre mí",
    about_body: &[
        "Soy un desarrollador al que le gusta construir cosas desde cero.",
        "La mayor parte de mi trabajo es código abierto y está en GitHub.",
    ],

    docs_title: "Documentación",
    docs_intro: "Notas y guías de mis proyectos.",
    docs_unknown_topic: "No hay documentación para este tema.",

    error_title: "Error",
    error_unknown: "Error desconocido",
    error_go_home: "Volver al inicio",

    footer: "Hecho con Rust",
};

pub fn texts(language: Language) -> &'static Texts {
    match language {
        Language::English => &EN,
        Language::Spanish => &ES,
    }
}

/// Description of an HTTP-like status code.
pub fn error_description(code: u16, language: Language) -> Option<&'static str> {
    let (en, es) = match code {
        400 => ("Bad request", "Petición incorrecta"),
        401 => ("Unauthorized", "No autorizado"),
        403 => ("Forbidden", "Prohibido"),
        404 => ("Page not found", "Página no encontrada"),
        405 => ("Method not allowed", "Método no permitido"),
        408 => ("Request timeout", "Tiempo de espera agotado"),
        418 => ("I'm a teapot", "Soy una tetera"),
        429 => ("Too many requests", "Demasiadas peticiones"),
        500 => ("Internal error", "Error interno"),
        501 => ("Not implemented", "No implementado"),
        502 => ("Bad gateway", "Puerta de enlace incorrecta"),
        503 => ("Service unavailable", "Servicio no disponible"),
        504 => ("Gateway timeout", "Tiempo de espera de la puerta de enlace agotado"),
        _ => return None,
    };
    Some(match language {
        Language::English => en,
        Language::Spanish => es,
    })
}

/// Documentation topics: key, title and body.
pub static DOC_TOPICS: &[(&str, &str, &str)] = &[
    (
        "weft",
        "weft",
        "A small toolkit for building hash-routed single page applications in Rust.",
    ),
    (
        "site",
        "This site",
        "How this portfolio is put together: configuration, routes and views.",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_error_codes() {
        assert_eq!(error_description(404, Language::English), Some("Page not found"));
        assert_eq!(error_description(500, Language::English), Some("Internal error"));
        assert_eq!(error_description(404, Language::Spanish), Some("Página no encontrada"));
    }

    #[test]
    fn test_unknown_error_code() {
        assert_eq!(error_description(0, Language::English), None);
        assert_eq!(error_description(999, Language::Spanish), None);
    }

    #[test]
    fn test_bundles_selected_by_language() {
        assert_eq!(texts(Language::English).nav_home, "Home");
        assert_eq!(texts(Language::Spanish).nav_home, "Inicio");
    }

    #[test]
    fn test_doc_topic_keys_are_lower_case() {
        for (key, _, _) in DOC_TOPICS {
            assert_eq!(*key, key.to_lowercase());
        }
    }
}
