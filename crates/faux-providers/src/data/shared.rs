//! Locale-independent tables.

use faux_core::{MimeType, TldType};

pub const BLOOD_GROUPS: &[&str] = &["O+", "A+", "B+", "AB+", "O−", "A−", "B−", "AB−"];

pub const GENDER_SYMBOLS: &[&str] = &["♂", "♀", "⚲"];

/// Words used by `person.username`.
pub const USERNAMES: &[&str] = &[
    "aaron", "abbey", "acid", "actor", "agent", "alpha", "amber", "apple", "arrow", "atlas",
    "badge", "bamboo", "basil", "beacon", "birch", "blaze", "brook", "cactus", "canyon", "cedar",
    "cipher", "cobalt", "comet", "coral", "crane", "delta", "dune", "echo", "ember", "falcon",
    "fern", "flint", "frost", "garnet", "glacier", "harbor", "hazel", "indigo", "iris", "jade",
    "juniper", "kestrel", "lagoon", "lark", "lotus", "maple", "marble", "meadow", "nebula",
    "nova", "oasis", "onyx", "orbit", "pebble", "pixel", "quartz", "raven", "ridge", "sable",
    "sierra", "solar", "spruce", "tango", "thistle", "tundra", "umber", "vapor", "willow",
    "zenith", "zephyr",
];

pub const EMAIL_DOMAINS: &[&str] = &[
    "@example.com",
    "@example.org",
    "@example.net",
    "@mail.test",
    "@inbox.test",
    "@post.invalid",
];

pub const COUNTRY_CODES: &[&str] = &[
    "AR", "AT", "AU", "BE", "BR", "CA", "CH", "CL", "CN", "DE", "DK", "ES", "FI", "FR", "GB",
    "GR", "IE", "IN", "IT", "JP", "MX", "NL", "NO", "NZ", "PL", "PT", "RU", "SE", "US",
];

pub const CURRENCY_ISO_CODES: &[&str] = &[
    "AUD", "BRL", "CAD", "CHF", "CNY", "CZK", "DKK", "EUR", "GBP", "HKD", "INR", "JPY", "KRW",
    "MXN", "NOK", "NZD", "PLN", "RUB", "SEK", "SGD", "TRY", "USD", "ZAR",
];

pub const CRYPTOCURRENCY_ISO_CODES: &[&str] =
    &["BCH", "BNB", "BTC", "DASH", "DOGE", "DOT", "ETC", "ETH", "LTC", "SOL", "XMR", "XRP", "ZEC"];

pub const CRYPTOCURRENCY_SYMBOLS: &[&str] = &["₿", "Ł", "Ξ", "Ð", "ɱ", "ȿ"];

pub const STOCK_TICKERS: &[&str] = &[
    "AAPL", "ADBE", "AMD", "AMZN", "BA", "CSCO", "DIS", "GOOG", "IBM", "INTC", "JNJ", "KO",
    "MCD", "META", "MSFT", "NFLX", "NKE", "NVDA", "ORCL", "PEP", "PFE", "TSLA", "V", "WMT",
];

pub const STOCK_NAMES: &[&str] = &[
    "Apple Inc.",
    "Adobe Inc.",
    "Advanced Micro Devices",
    "Amazon.com Inc.",
    "Boeing Co.",
    "Cisco Systems",
    "Walt Disney Co.",
    "Alphabet Inc.",
    "International Business Machines",
    "Intel Corp.",
    "Johnson & Johnson",
    "Coca-Cola Co.",
    "Microsoft Corp.",
    "Netflix Inc.",
    "NVIDIA Corp.",
    "Oracle Corp.",
    "Tesla Inc.",
    "Walmart Inc.",
];

pub const STOCK_EXCHANGES: &[&str] = &[
    "NYSE", "NASDAQ", "AMEX", "JPX", "SSE", "HKEX", "Euronext", "LSE", "TSX", "MOEX",
];

pub const EMOJI: &[&str] = &[
    ":+1:", ":100:", ":alien:", ":apple:", ":bee:", ":bulb:", ":cactus:", ":cat:", ":coffee:",
    ":dog:", ":fire:", ":ghost:", ":heart:", ":joy:", ":moon:", ":octopus:", ":rocket:",
    ":smile:", ":sparkles:", ":star:", ":sunflower:", ":tada:", ":unicorn:", ":wave:",
];

/// Lowercase words for hashtags, slugs and path segments.
pub const WORDS: &[&str] = &[
    "ancient", "autumn", "bird", "blue", "breeze", "bright", "calm", "cloud", "coffee", "cold",
    "dawn", "dream", "dust", "field", "fire", "flower", "forest", "glade", "gold", "grass",
    "happy", "haze", "hill", "lake", "leaf", "light", "love", "meadow", "moon", "morning",
    "night", "ocean", "paper", "photo", "pine", "rain", "river", "sea", "shadow", "sky", "snow",
    "sound", "spring", "star", "stone", "summer", "sun", "sunset", "travel", "tree", "water",
    "wave", "wind", "winter", "wood",
];

/// Top-level domains of a kind.
pub fn tlds(kind: TldType) -> &'static [&'static str] {
    match kind {
        TldType::Cctld => &[".de", ".fr", ".jp", ".nl", ".ru", ".uk", ".us", ".br", ".in", ".au"],
        TldType::Gtld => &[".com", ".org", ".net", ".info", ".biz", ".app", ".dev", ".io"],
        TldType::Geotld => &[".amsterdam", ".berlin", ".london", ".moscow", ".nyc", ".paris", ".tokyo"],
        TldType::Utld => &[".bitnet", ".csnet", ".onion", ".uucp"],
        TldType::Stld => &[".aero", ".asia", ".cat", ".coop", ".edu", ".gov", ".jobs", ".mil", ".museum"],
    }
}

pub const USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 14_2) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.2 Safari/605.1.15",
    "Mozilla/5.0 (X11; Linux x86_64; rv:121.0) Gecko/20100101 Firefox/121.0",
    "Mozilla/5.0 (iPhone; CPU iPhone OS 17_2 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.2 Mobile/15E148 Safari/604.1",
    "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Mobile Safari/537.36",
    "curl/8.5.0",
];

pub const HTTP_METHODS: &[&str] = &["CONNECT", "DELETE", "GET", "HEAD", "OPTIONS", "PATCH", "POST", "PUT", "TRACE"];

pub const HTTP_STATUS_CODES: &[i64] = &[
    100, 101, 200, 201, 202, 204, 206, 301, 302, 303, 304, 307, 308, 400, 401, 403, 404, 405,
    408, 409, 410, 418, 422, 429, 500, 501, 502, 503, 504,
];

pub const HTTP_STATUS_MESSAGES: &[&str] = &[
    "100 Continue",
    "101 Switching Protocols",
    "200 OK",
    "201 Created",
    "202 Accepted",
    "204 No Content",
    "301 Moved Permanently",
    "302 Found",
    "304 Not Modified",
    "400 Bad Request",
    "401 Unauthorized",
    "403 Forbidden",
    "404 Not Found",
    "405 Method Not Allowed",
    "409 Conflict",
    "418 I'm a teapot",
    "429 Too Many Requests",
    "500 Internal Server Error",
    "502 Bad Gateway",
    "503 Service Unavailable",
];

/// Media types of a family.
pub fn mime_types(family: MimeType) -> &'static [&'static str] {
    match family {
        MimeType::Application => &[
            "application/gzip",
            "application/json",
            "application/octet-stream",
            "application/pdf",
            "application/xml",
            "application/zip",
        ],
        MimeType::Audio => &["audio/aac", "audio/flac", "audio/mpeg", "audio/ogg", "audio/wav"],
        MimeType::Image => &["image/avif", "image/gif", "image/jpeg", "image/png", "image/svg+xml", "image/webp"],
        MimeType::Message => &["message/http", "message/partial", "message/rfc822"],
        MimeType::Text => &["text/css", "text/csv", "text/html", "text/markdown", "text/plain"],
        MimeType::Video => &["video/mp4", "video/mpeg", "video/ogg", "video/webm"],
    }
}

/// Folder names found under a user's home directory.
pub const FOLDERS: &[&str] = &[
    "Development", "Documents", "Downloads", "Music", "Pictures", "Projects", "Public", "Videos",
];

pub const PROGRAMMING_LANGS: &[&str] = &[
    "C", "Clojure", "Elixir", "Erlang", "Go", "Haskell", "Java", "JavaScript", "Kotlin", "OCaml",
    "Python", "Ruby", "Rust", "Scala", "Swift", "TypeScript", "Zig",
];

pub const PROJECT_NAMES: &[&str] = &[
    "aurora", "beacon", "chronos", "dynamo", "ember", "flux", "gossamer", "helix", "ion", "jetty",
    "kraken", "lumen", "mosaic", "nimbus", "orchid", "prism", "quasar", "relay", "sentry",
    "tessera", "umbra", "vortex",
];
