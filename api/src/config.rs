use std::env;
use std::path::PathBuf;

const DEFAULT_CAL_URL: &str = "https://cal.com/lumiere-ccdlpn/30min";
const DEFAULT_DRIVE_API_URL: &str = "https://www.googleapis.com";

#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    /// Root of the static asset set (gallery folders, team images, reels)
    pub public_dir: PathBuf,
    /// Google Drive API key. Absent means the proxy always falls back to the embedded viewer.
    pub drive_api_key: Option<String>,
    pub drive_api_url: String,
    pub drive_timeout_secs: u64,
    /// Scheduling link used verbatim by every call-to-action
    pub cal_url: String,
    pub contact_email: String,
    pub contact_phone: String,
    /// Per-IP requests per second on the routes that call out to Google Drive
    pub rate_limit_per_second: Option<u64>,
    pub rate_limit_burst: u32,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            public_dir: non_empty("PUBLIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("public")),
            drive_api_key: non_empty("GOOGLE_DRIVE_API_KEY")
                .or_else(|| non_empty("NEXT_PUBLIC_GOOGLE_DRIVE_API_KEY")),
            drive_api_url: non_empty("GOOGLE_DRIVE_API_URL")
                .unwrap_or_else(|| DEFAULT_DRIVE_API_URL.to_string()),
            drive_timeout_secs: env::var("DRIVE_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
            cal_url: non_empty("CAL_URL")
                .or_else(|| non_empty("NEXT_PUBLIC_CAL_URL"))
                .unwrap_or_else(|| DEFAULT_CAL_URL.to_string()),
            contact_email: non_empty("CONTACT_EMAIL")
                .unwrap_or_else(|| "lumiere.elevated@gmail.com".to_string()),
            contact_phone: non_empty("CONTACT_PHONE")
                .unwrap_or_else(|| "+919901584053".to_string()),
            rate_limit_per_second: env::var("RATE_LIMIT_PER_SECOND")
                .ok()
                .and_then(|s| s.parse().ok())
                .filter(|n| *n > 0),
            rate_limit_burst: env::var("RATE_LIMIT_BURST")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(5),
        }
    }

    /// Check if live Drive listing is configured
    pub fn drive_enabled(&self) -> bool {
        self.drive_api_key.is_some()
    }

    /// Directory scanned by `/api/gallery`
    pub fn gallery_dir(&self) -> PathBuf {
        self.public_dir.join("gallery")
    }

    /// Interval between quota refills for the configured rate. Rates above
    /// 1000/s clamp to one refill per millisecond.
    pub fn rate_limit_replenish_ms(&self) -> Option<u64> {
        self.rate_limit_per_second
            .filter(|rate| *rate > 0)
            .map(|rate| (1000 / rate).max(1))
    }
}

#[cfg(test)]
impl Config {
    /// Configuration pointing at a test public root with Drive disabled
    pub fn for_tests(public_dir: impl Into<PathBuf>) -> Self {
        Self {
            port: 0,
            public_dir: public_dir.into(),
            drive_api_key: None,
            drive_api_url: DEFAULT_DRIVE_API_URL.to_string(),
            drive_timeout_secs: 5,
            cal_url: DEFAULT_CAL_URL.to_string(),
            contact_email: "lumiere.elevated@gmail.com".to_string(),
            contact_phone: "+919901584053".to_string(),
            rate_limit_per_second: None,
            rate_limit_burst: 5,
        }
    }
}

fn non_empty(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}
