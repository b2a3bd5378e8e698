use crate::page::Icon;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    ProfessionalNetwork,
    CodeHosting,
    Email,
    Scheduling,
}

/// External reference shown in the contact row. Always opens in a new tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactLink {
    pub kind: ContactKind,
    pub icon: Icon,
    pub href: &'static str,
    pub label: &'static str,
}

pub const CONTACT_LINKS: &[ContactLink] = &[
    ContactLink {
        kind: ContactKind::ProfessionalNetwork,
        icon: Icon::Linkedin,
        href: "https://www.linkedin.com/in/jose-moya-55820974/",
        label: "LinkedIn",
    },
    ContactLink {
        kind: ContactKind::CodeHosting,
        icon: Icon::Github,
        href: "https://github.com/PaulMoya",
        label: "GitHub",
    },
    ContactLink {
        kind: ContactKind::Email,
        icon: Icon::Mail,
        href: "mailto:josepaulmoya@gmail.com",
        label: "Email",
    },
    ContactLink {
        kind: ContactKind::Scheduling,
        icon: Icon::Phone,
        href: "https://cal.com/Jose.Moya",
        label: "Schedule a Call",
    },
];

pub fn find(links: &'static [ContactLink], kind: ContactKind) -> Option<&'static ContactLink> {
    links.iter().find(|link| link.kind == kind)
}
