use chrono::NaiveDate;
use portfolio_site::{
    content::{Certificate, Project},
    scroll_spy::ScrollSpyState,
    sections::{
        certificates_section, contact_section, format_certificate_date, hero_section,
        landing_page, navbar, projects_section, CertificateCard, ImageSlot, ProjectCard,
        LANDING_CERTIFICATE_LIMIT, LANDING_PROJECT_LIMIT,
    },
    ContentCatalog, ThemeState, PORTFOLIO,
};

fn project(id: u32) -> Project {
    Project {
        id,
        title: "Sample project",
        description: "A project used in tests.",
        image: None,
        tech_stack: &["Rust"],
        category: "Backend",
        live_url: Some("#"),
        github_url: None,
    }
}

fn certificate(id: u32) -> Certificate {
    Certificate {
        id,
        name: "Sample certificate",
        issuer: "Test Academy",
        image: Some(""),
        issued_date: "2025-02-16",
        expiry_date: None,
    }
}

/// The real catalog with `count` projects and certificates.
fn catalog_with(count: u32) -> &'static ContentCatalog {
    let projects = Box::leak((1..=count).map(project).collect::<Box<[_]>>());
    let certificates = Box::leak((1..=count).map(certificate).collect::<Box<[_]>>());
    Box::leak(Box::new(ContentCatalog {
        projects: &*projects,
        certificates: &*certificates,
        ..PORTFOLIO
    }))
}

#[test]
fn landing_sections_show_at_most_the_configured_caps() {
    for count in [0, 2, 3, 6, 10] {
        let catalog = catalog_with(count);
        let projects = projects_section(catalog);
        let certificates = certificates_section(catalog);

        assert_eq!(
            projects.cards.len(),
            LANDING_PROJECT_LIMIT.min(count as usize)
        );
        assert_eq!(
            certificates.cards.len(),
            LANDING_CERTIFICATE_LIMIT.min(count as usize)
        );
    }
}

#[test]
fn caps_keep_catalog_order() {
    let catalog = catalog_with(10);
    let ids: Vec<u32> = projects_section(catalog)
        .cards
        .iter()
        .map(|card| card.id)
        .collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn view_all_links_point_at_the_external_galleries() {
    let projects = projects_section(&PORTFOLIO);
    assert_eq!(projects.view_all.href, "https://github.com/helmiiputraa");

    let certificates = certificates_section(&PORTFOLIO);
    assert_eq!(
        certificates.view_all.href,
        PORTFOLIO.certificates_gallery_url
    );
}

#[test]
fn certificate_dates_use_long_form() {
    assert_eq!(
        format_certificate_date(NaiveDate::from_ymd_opt(2024, 7, 7)),
        "July 7, 2024"
    );
    assert_eq!(format_certificate_date(None), "No expiration");

    let card = CertificateCard::from(&PORTFOLIO.certificates[0]);
    assert_eq!(card.issued, "July 7, 2024");
    assert_eq!(card.expires, "July 7, 2027");

    let card = CertificateCard::from(&PORTFOLIO.certificates[1]);
    assert_eq!(card.issued, "February 16, 2025");
    assert_eq!(card.expires, "No expiration");
}

#[test]
fn placeholder_live_links_are_hidden() {
    let card = ProjectCard::from(&PORTFOLIO.projects[1]);
    assert_eq!(card.live_url, None);
    assert!(card.github_url.is_some());

    let card = ProjectCard::from(&PORTFOLIO.projects[0]);
    assert_eq!(
        card.live_url,
        Some("https://kopi-senja-akbar-digital.vercel.app/")
    );
}

#[test]
fn failed_images_fall_back_to_their_placeholder_for_good() {
    let mut hero = hero_section(&PORTFOLIO);
    assert!(!hero.avatar.is_placeholder());

    hero.avatar.on_load_error();
    assert_eq!(hero.avatar, ImageSlot::Placeholder { glyph: "👨‍💻" });

    hero.avatar.on_load_error();
    assert_eq!(hero.avatar, ImageSlot::Placeholder { glyph: "👨‍💻" });
}

#[test]
fn missing_images_start_as_placeholders() {
    let catalog = catalog_with(1);
    let project = &projects_section(catalog).cards[0];
    assert_eq!(project.image, ImageSlot::Placeholder { glyph: "globe-alt" });

    let certificate = &certificates_section(catalog).cards[0];
    assert_eq!(
        certificate.image,
        ImageSlot::Placeholder {
            glyph: "badge-check"
        }
    );
}

#[test]
fn hero_greets_with_the_owner_name() {
    let hero = hero_section(&PORTFOLIO);
    assert_eq!(hero.greeting, "Hi, I'm Helmi Putra!");
    assert_eq!(hero.typing_phrases, ["FullStack", "Frontend", "Backend"]);
    assert_eq!(hero.cta_target, "projects");
}

#[test]
fn contact_links_open_profiles_in_new_tabs_only() {
    let contact = contact_section(&PORTFOLIO, 2026);

    let email = &contact.links[0];
    assert_eq!(email.href, "mailto:helmipratama117@gmail.com");
    assert_eq!(email.value, "helmipratama117@gmail.com");
    assert!(!email.opens_new_tab);
    assert!(contact.links[1..].iter().all(|link| link.opens_new_tab));

    let shown: Vec<&str> = contact.links.iter().map(|link| link.value).collect();
    assert_eq!(
        shown,
        vec![
            "helmipratama117@gmail.com",
            "helmiiputraa",
            "helmiiputraa",
            "helmi-putra-noor-pratama",
        ]
    );
    assert_eq!(contact.links[1].href, "https://github.com/helmiiputraa");
    assert_eq!(contact.links[3].color, "#0A66C2");
    assert_eq!(
        contact.links[1].description,
        "View my repositories & contributions"
    );

    assert_eq!(
        contact.footer.copyright,
        "Copyright © 2026 Helmi Putra. All rights reserved."
    );
}

#[test]
fn navbar_marks_the_scroll_spy_section_active() {
    let scroll = ScrollSpyState {
        active_section: "projects".to_string(),
        is_scrolled: true,
    };
    let nav = navbar(&PORTFOLIO, &scroll);

    let active: Vec<&str> = nav
        .items
        .iter()
        .filter(|item| item.is_active)
        .map(|item| item.name)
        .collect();
    assert_eq!(active, vec!["Projects"]);
    assert!(nav.is_scrolled);
    assert_eq!(nav.items[0].href, "#home");
}

#[test]
fn landing_page_follows_the_theme() {
    let scroll = ScrollSpyState {
        active_section: "home".to_string(),
        is_scrolled: false,
    };
    let dark = landing_page(&PORTFOLIO, ThemeState { is_dark: true }, &scroll, 2026);
    let light = landing_page(&PORTFOLIO, ThemeState { is_dark: false }, &scroll, 2026);

    assert_ne!(dark.palette, light.palette);
    assert_eq!(dark.palette, ThemeState { is_dark: true }.palette());

    let json = serde_json::to_value(&dark).unwrap();
    assert_eq!(json["theme"]["isDark"], true);
    assert_eq!(json["projects"]["cards"].as_array().map(Vec::len), Some(3));
}

#[test]
fn certificate_preview_opens_on_select_and_closes() {
    let mut section = certificates_section(&PORTFOLIO);
    assert!(section.selected().is_none());

    assert!(section.select(2));
    let preview = section.selected().unwrap();
    assert_eq!(preview.name, "CCNA Cisco");
    assert_eq!(preview.issued_label(), "Issued: February 16, 2025");
    assert_eq!(preview.expires_label(), "Expires: No expiration");

    assert!(section.select(1));
    assert_eq!(section.selected().map(|card| card.id), Some(1));

    section.close();
    assert!(section.selected().is_none());
}

#[test]
fn selecting_an_unknown_certificate_keeps_the_modal_closed() {
    let mut section = certificates_section(catalog_with(10));
    assert!(!section.select(7));
    assert!(!section.select(99));
    assert!(section.selected().is_none());
}

#[test]
fn preview_image_falls_back_without_touching_the_card() {
    let mut section = certificates_section(&PORTFOLIO);
    section.select(1);
    section.on_preview_image_error();

    assert!(section.selected().unwrap().image.is_placeholder());
    assert!(!section.cards[0].image.is_placeholder());

    section.close();
    section.on_preview_image_error();
    assert!(section.selected().is_none());
}

#[test]
fn mobile_menu_toggles_and_closes_on_navigation() {
    let scroll = ScrollSpyState {
        active_section: "home".to_string(),
        is_scrolled: false,
    };
    let mut nav = navbar(&PORTFOLIO, &scroll);
    assert!(!nav.is_mobile_open);

    assert!(nav.toggle_mobile());
    assert_eq!(nav.navigate("about"), Some("#about".to_string()));
    assert!(!nav.is_mobile_open);

    nav.toggle_mobile();
    assert_eq!(nav.navigate("blog"), None);
    assert!(!nav.is_mobile_open);

    nav.toggle_mobile();
    assert!(!nav.toggle_mobile());
}
