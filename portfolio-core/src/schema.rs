//! schema.org structured data for search engines.

use crate::content::{CERTIFICATIONS, PROFILE, SKILLS, SOCIAL_LINKS};
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PersonDocument {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'static str,
    job_title: &'static str,
    description: &'static str,
    email: String,
    telephone: &'static str,
    address: PostalAddress,
    same_as: Vec<&'static str>,
    knows_about: &'static [&'static str],
    has_credential: Vec<Credential>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PostalAddress {
    #[serde(rename = "@type")]
    kind: &'static str,
    address_locality: &'static str,
    address_country: &'static str,
}

#[derive(Serialize)]
struct Credential {
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'static str,
    url: &'static str,
}

/// JSON-LD `Person` document for the page owner.
pub fn person_json_ld() -> serde_json::Result<String> {
    let document = PersonDocument {
        context: "https://schema.org",
        kind: "Person",
        name: PROFILE.name,
        job_title: PROFILE.role,
        description: PROFILE.summary,
        email: format!("mailto:{}", PROFILE.email),
        telephone: PROFILE.phone,
        address: PostalAddress {
            kind: "PostalAddress",
            address_locality: PROFILE.city,
            address_country: PROFILE.country,
        },
        same_as: SOCIAL_LINKS
            .iter()
            .filter(|link| link.is_external())
            .map(|link| link.href)
            .collect(),
        knows_about: SKILLS,
        has_credential: CERTIFICATIONS
            .iter()
            .map(|cert| Credential {
                kind: "EducationalOccupationalCredential",
                name: cert.title,
                url: cert.url,
            })
            .collect(),
    };
    serde_json::to_string(&document)
}
