// src/core/knowledge_base.rs

//! Static, read-only database of every finding the scanner can report,
//! with human-readable explanations and advice. Detectors return codes;
//! both the report message and the CLI's verbose output resolve here.

use crate::core::models::Severity;
use std::fmt;

/// High-level families the detectors fall into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FindingCategory {
    /// Findings raised from `<script>` element contents.
    Script,
    /// Findings raised from `<iframe>` styling or sources.
    Iframe,
    /// Findings raised from `<a>` link targets.
    Link,
    /// Findings raised from `<meta>` refresh directives.
    Redirect,
}

impl fmt::Display for FindingCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FindingCategory::Script => write!(f, "Script Content"),
            FindingCategory::Iframe => write!(f, "Embedded Frames"),
            FindingCategory::Link => write!(f, "Outbound Links"),
            FindingCategory::Redirect => write!(f, "Automatic Redirects"),
        }
    }
}

// Finding codes returned by the detector chain.
pub const SCRIPT_SUSPICIOUS_PATTERN: &str = "SCRIPT_SUSPICIOUS_PATTERN";
pub const IFRAME_HIDDEN: &str = "IFRAME_HIDDEN";
pub const IFRAME_UNTRUSTED_SOURCE: &str = "IFRAME_UNTRUSTED_SOURCE";
pub const LINK_PHISHING_KEYWORD: &str = "LINK_PHISHING_KEYWORD";
pub const META_REFRESH_REDIRECT: &str = "META_REFRESH_REDIRECT";

/// Everything needed to present one finding to a user.
pub struct FindingDetail {
    /// Unique machine-readable identifier (e.g. "IFRAME_HIDDEN").
    pub code: &'static str,
    /// Short human-readable message. This exact string becomes the report
    /// line for the finding.
    pub title: &'static str,
    pub category: FindingCategory,
    pub severity: Severity,
    /// What the finding means and why it matters.
    pub description: &'static str,
    /// What a user should do about it.
    pub advice: &'static str,
}

/// The centralized knowledge base of all positive findings.
static FINDINGS: &[FindingDetail] = &[
    FindingDetail {
        code: SCRIPT_SUSPICIOUS_PATTERN,
        title: "Suspicious script detected",
        category: FindingCategory::Script,
        severity: Severity::Critical,
        description: "An inline script on the page uses constructs that frequently appear in injected or obfuscated payloads: dynamic code evaluation, direct document mutation, URL unescaping, resource-source reassignment, navigation reassignment, or base64 tokens.",
        advice: "Do not enter any data on this page. Legitimate sites occasionally use these constructs too, so treat this as a strong warning rather than proof of compromise.",
    },
    FindingDetail {
        code: IFRAME_HIDDEN,
        title: "Hidden iframe detected",
        category: FindingCategory::Iframe,
        severity: Severity::Critical,
        description: "The page embeds a frame styled to be invisible (display:none or absolute positioning). Hidden frames are a classic vehicle for drive-by downloads and click-jacking.",
        advice: "Close the page. There is almost no legitimate reason to embed content the visitor cannot see.",
    },
    FindingDetail {
        code: IFRAME_UNTRUSTED_SOURCE,
        title: "Suspicious iframe source detected",
        category: FindingCategory::Iframe,
        severity: Severity::Warning,
        description: "The page embeds a frame whose source does not reference the trusted domain. This check deliberately over-approximates: ordinary third-party embeds such as ads and video players are flagged as well.",
        advice: "Check where the embedded frame actually points before interacting with it.",
    },
    FindingDetail {
        code: LINK_PHISHING_KEYWORD,
        title: "Possible phishing link detected",
        category: FindingCategory::Link,
        severity: Severity::Warning,
        description: "A link on the page points at a target containing 'login' or 'verify', wording that credential-harvesting pages rely on. The match is a plain substring, so benign links can trigger it.",
        advice: "Never follow login or verification links from pages you do not trust; navigate to the site directly instead.",
    },
    FindingDetail {
        code: META_REFRESH_REDIRECT,
        title: "Meta refresh redirect detected",
        category: FindingCategory::Redirect,
        severity: Severity::Warning,
        description: "The page instructs the browser to navigate elsewhere automatically via a meta refresh directive with an embedded target URL, a technique often used to bounce visitors to malicious destinations.",
        advice: "Inspect the redirect target before letting the page forward you anywhere.",
    },
];

/// Looks up the full detail for a finding code.
pub fn find(code: &str) -> Option<&'static FindingDetail> {
    FINDINGS.iter().find(|detail| detail.code == code)
}

/// Report message for a code. Unknown codes fall back to the code itself
/// so a missing entry degrades to an ugly line, not a panic.
pub fn title_for(code: &'static str) -> &'static str {
    find(code).map(|detail| detail.title).unwrap_or(code)
}

/// Reverse lookup from a report line, used by the CLI to attach
/// explanations to finished reports.
pub fn find_by_title(title: &str) -> Option<&'static FindingDetail> {
    FINDINGS.iter().find(|detail| detail.title == title)
}
