use super::*;

fn all_links() -> Vec<&'static str> {
    let mut links = vec![MAILTO, LINKEDIN_URL, GITHUB_URL, MEDIUM_PROFILE_URL];
    links.extend(ARTICLES.iter().map(|a| a.url));
    links.extend(PROJECTS.iter().flat_map(|p| [p.github, p.demo]).flatten());
    links.extend(PUBLICATIONS.iter().filter_map(|p| p.doi));
    links.extend(CONTACT_CHANNELS.iter().filter_map(|c| c.href));
    links.extend(SOCIAL_LINKS.iter().map(|(_, href)| *href));
    links
}

// =============================================================================
// Links
// =============================================================================

#[test]
fn every_link_is_absolute() {
    for link in all_links() {
        assert!(
            link.starts_with("https://") || link.starts_with("mailto:"),
            "relative or placeholder link: {link:?}"
        );
    }
}

#[test]
fn unpublished_links_are_absent() {
    let vit = PROJECTS.iter().find(|p| p.title.contains("Vision Transformers")).unwrap();
    assert!(vit.github.is_none());
    assert!(PROJECTS.iter().all(|p| p.demo.is_none()));
    assert_eq!(PUBLICATIONS.iter().filter(|p| p.doi.is_some()).count(), 2);
}

#[test]
fn only_web_links_open_new_tab() {
    assert!(opens_new_tab(MEDIUM_PROFILE_URL));
    assert!(opens_new_tab(PROJECTS[0].github.unwrap()));
    assert!(!opens_new_tab(MAILTO));
    assert!(!opens_new_tab("#about"));
}

#[test]
fn email_channel_mails_the_displayed_address() {
    let email = CONTACT_CHANNELS.iter().find(|c| c.label == "Email").unwrap();
    assert_eq!(email.href, Some(MAILTO));
    assert_eq!(MAILTO.strip_prefix("mailto:"), Some(email.text));
}

// =============================================================================
// Tables
// =============================================================================

#[test]
fn section_headers_follow_navigation_order() {
    let headers = [ABOUT, WRITING, SKILLS, WORK, HISTORY, ACADEMICS, REACH];
    let ids: Vec<SectionId> = headers.iter().map(|h| h.id).collect();
    let expected: Vec<SectionId> = SectionId::ALL.into_iter().skip(1).collect();
    assert_eq!(ids, expected);
}

#[test]
fn tables_carry_every_original_entry() {
    assert_eq!(ABOUT_PARAGRAPHS.len(), 3);
    assert_eq!(ARTICLES.len(), 1);
    assert_eq!(SKILL_CATEGORIES.len(), 6);
    assert_eq!(PROJECTS.len(), 3);
    assert_eq!(ROLES.len(), 3);
    assert_eq!(DEGREES.len(), 2);
    assert_eq!(PUBLICATIONS.len(), 4);
    assert_eq!(CERTIFICATES.len(), 4);
    assert_eq!(CONFERENCE_ACTIVITIES.len(), 3);
}

#[test]
fn no_entry_has_empty_lists() {
    assert!(SKILL_CATEGORIES.iter().all(|c| !c.skills.is_empty()));
    assert!(PROJECTS.iter().all(|p| !p.features.is_empty() && !p.tech.is_empty() && !p.tags.is_empty()));
    assert!(ROLES.iter().all(|r| !r.achievements.is_empty()));
    assert!(ARTICLES.iter().all(|a| !a.tags.is_empty()));
}
