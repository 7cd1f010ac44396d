/// URL parsing and classification for Tab Corral
use url::Url;

/// Structured view of an http(s) URL, built fresh on every parse.
///
/// Invariant: `hostname` either equals `domain` (no subdomain) or ends
/// with `"." + domain`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedUrl {
    pub protocol: String,
    pub hostname: String,
    pub domain: String,
    pub subdomain: String,
    pub pathname: String,
    pub first_path_segment: String,
}

/// Two-label public suffixes that push the registrable domain out to
/// three labels (e.g. "bbc.co.uk" instead of "co.uk").
///
/// A deliberate approximation of the public suffix list: fixed and
/// enumerable, no wildcard or exception rules, no suffixes longer than
/// two labels.
const SECOND_LEVEL_TLDS: &[&str] = &[
    "co.uk", "co.jp", "co.kr", "co.nz", "co.za", "co.in", "com.au", "com.br", "com.cn", "com.hk",
    "com.mx", "com.sg", "com.tw", "ne.jp", "or.jp", "ac.jp", "go.jp", "org.uk", "org.au", "net.au",
    "net.nz",
];

/// Parse a URL string into its components
///
/// Returns `None` when the string is not a valid absolute URL or when the
/// scheme is not http(s) — `chrome://`, `file://`, `about:` and friends are
/// all rejected. Hostnames come back the way the parser normalizes them,
/// the same normalization the browser applies in the address bar.
pub fn parse_url(url_string: &str) -> Option<ParsedUrl> {
    let url = Url::parse(url_string).ok()?;

    // Skip non-http(s) URLs
    if !url.scheme().starts_with("http") {
        return None;
    }

    let hostname = url.host_str()?.to_string();
    let pathname = url.path().to_string();
    let domain = extract_domain(&hostname);
    let subdomain = extract_subdomain(&hostname, &domain);
    let first_path_segment = extract_first_path_segment(&pathname);

    Some(ParsedUrl {
        protocol: format!("{}:", url.scheme()),
        hostname,
        domain,
        subdomain,
        pathname,
        first_path_segment,
    })
}

/// Extract the registrable (root) domain from a hostname
///
/// e.g., "sub.example.com" -> "example.com". Hostnames with two or fewer
/// labels are already root domains. Otherwise the last two labels are
/// checked against [`SECOND_LEVEL_TLDS`]: on a hit the domain is the last
/// three labels, else the last two. IP literals and single-label hosts are
/// not special-cased; they fall through the same dot-splitting.
pub fn extract_domain(hostname: &str) -> String {
    let parts: Vec<&str> = hostname.split('.').collect();

    if parts.len() <= 2 {
        return hostname.to_string();
    }

    let last_two = format!("{}.{}", parts[parts.len() - 2], parts[parts.len() - 1]);
    let num_parts = if SECOND_LEVEL_TLDS.contains(&last_two.as_str()) {
        3
    } else {
        2
    };

    parts[parts.len() - num_parts..].join(".")
}

/// Extract the subdomain from a hostname given its root domain
///
/// e.g., ("sub.example.com", "example.com") -> "sub". Empty when the
/// hostname is the root domain itself, or (defensively) when the domain is
/// not a suffix of the hostname.
pub fn extract_subdomain(hostname: &str, domain: &str) -> String {
    if hostname == domain {
        return String::new();
    }

    let suffix = format!(".{domain}");
    match hostname.strip_suffix(&suffix) {
        Some(prefix) => prefix.to_string(),
        None => String::new(),
    }
}

/// Extract the first non-empty path segment
///
/// e.g., "/docs/guide/intro" -> "docs". Both "" and "/" yield "".
pub fn extract_first_path_segment(pathname: &str) -> String {
    pathname
        .split('/')
        .find(|segment| !segment.is_empty())
        .unwrap_or_default()
        .to_string()
}

/// Check if two URLs share the same registrable domain
///
/// Total over arbitrary strings: false whenever either side fails to parse.
pub fn matches_domain(url1: &str, url2: &str) -> bool {
    match (parse_url(url1), parse_url(url2)) {
        (Some(a), Some(b)) => a.domain == b.domain,
        _ => false,
    }
}

/// Check if two URLs share the same full hostname (domain + subdomain)
pub fn matches_subdomain(url1: &str, url2: &str) -> bool {
    match (parse_url(url1), parse_url(url2)) {
        (Some(a), Some(b)) => a.hostname == b.hostname,
        _ => false,
    }
}

/// Check if two URLs share the same hostname and first path segment
pub fn matches_subdirectory(url1: &str, url2: &str) -> bool {
    match (parse_url(url1), parse_url(url2)) {
        (Some(a), Some(b)) => {
            a.hostname == b.hostname && a.first_path_segment == b.first_path_segment
        }
        _ => false,
    }
}
