use super::{ImageSlot, ViewAllLink, LANDING_CERTIFICATE_LIMIT};
use crate::content::{Certificate, ContentCatalog};
use chrono::NaiveDate;
use serde::Serialize;

/// `July 7, 2024`, or `No expiration` when there is no date.
#[must_use]
pub fn format_certificate_date(date: Option<NaiveDate>) -> String {
    date.map_or_else(
        || "No expiration".to_string(),
        |date| date.format("%B %-d, %Y").to_string(),
    )
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateCard {
    pub id: u32,
    pub name: &'static str,
    pub issuer: &'static str,
    pub image: ImageSlot,
    pub issued: String,
    pub expires: String,
}

impl From<&'static Certificate> for CertificateCard {
    fn from(certificate: &'static Certificate) -> Self {
        // An unparsable issue date is shown as written.
        let issued = certificate.issued_on().map_or_else(
            || certificate.issued_date.to_string(),
            |date| format_certificate_date(Some(date)),
        );
        Self {
            id: certificate.id,
            name: certificate.name,
            issuer: certificate.issuer,
            image: ImageSlot::new(certificate.image, certificate.name, "badge-check"),
            issued,
            expires: format_certificate_date(certificate.expires_on()),
        }
    }
}

impl CertificateCard {
    #[must_use]
    pub fn issued_label(&self) -> String {
        format!("Issued: {}", self.issued)
    }

    #[must_use]
    pub fn expires_label(&self) -> String {
        format!("Expires: {}", self.expires)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificatesSection {
    pub section_id: &'static str,
    pub cards: Vec<CertificateCard>,
    pub view_all: ViewAllLink,
    /// Card open in the preview modal. The modal owns its own image slot.
    pub selected: Option<CertificateCard>,
}

impl CertificatesSection {
    /// Open the preview for the card with `id`, replacing any open one.
    /// Returns `false` when no landing card has that id.
    pub fn select(&mut self, id: u32) -> bool {
        let Some(card) = self.cards.iter().find(|card| card.id == id) else {
            return false;
        };
        self.selected = Some(card.clone());
        true
    }

    /// Backdrop click or the close button.
    pub fn close(&mut self) {
        self.selected = None;
    }

    #[must_use]
    pub fn selected(&self) -> Option<&CertificateCard> {
        self.selected.as_ref()
    }

    /// The preview image failed to load.
    pub fn on_preview_image_error(&mut self) {
        if let Some(card) = &mut self.selected {
            card.image.on_load_error();
        }
    }
}

#[must_use]
pub fn certificates_section(catalog: &'static ContentCatalog) -> CertificatesSection {
    CertificatesSection {
        section_id: "certificates",
        cards: catalog
            .certificates
            .iter()
            .take(LANDING_CERTIFICATE_LIMIT)
            .map(CertificateCard::from)
            .collect(),
        view_all: ViewAllLink {
            label: "View All Certificates",
            href: catalog.certificates_gallery_url,
        },
        selected: None,
    }
}
