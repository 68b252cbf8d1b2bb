//! Offline canned responder.
//!
//! Answers from a fixed keyword table so the widget can be exercised without
//! an assistant service. No network, only an optional artificial latency.

use std::{convert::Infallible, time::Duration};

use boba_app::{Message, Transport};

/// Reply when no rule matches.
const UNKNOWN_REPLY: &str =
    "Maaf, Boba belum tahu jawabannya. Coba tanya tentang sekolah, jurusan, atau pendaftaran ya!";

/// Keyword rules, checked in order against the lowercased message.
const DEFAULT_RULES: &[(&[&str], &str)] = &[
    (&["sekolah apa", "nama sekolah"], "Ini SMK TI Bazma, sekolah berasrama di bidang teknologi informasi."),
    (&["jurusan", "program"], "SMK TI Bazma punya jurusan Teknik Komputer dan Jaringan serta Rekayasa Perangkat Lunak."),
    (&["daftar", "pendaftaran", "masuk"], "Pendaftaran dibuka setiap tahun ajaran baru. Info lengkap ada di website sekolah."),
    (&["lokasi", "alamat", "di mana", "dimana"], "SMK TI Bazma berlokasi di Bogor, Jawa Barat."),
    (&["halo", "hai", "assalam"], "Hai juga! Ada yang bisa Boba bantu?"),
];

/// Transport that answers locally from a keyword table.
#[derive(Debug, Clone)]
pub struct CannedTransport {
    rules: Vec<(Vec<String>, String)>,
    fallback: String,
    latency: Duration,
}

impl Default for CannedTransport {
    fn default() -> Self {
        let rules = DEFAULT_RULES
            .iter()
            .map(|(keywords, reply)| {
                (keywords.iter().map(ToString::to_string).collect(), (*reply).to_string())
            })
            .collect();
        Self { rules, fallback: UNKNOWN_REPLY.to_string(), latency: Duration::ZERO }
    }
}

impl CannedTransport {
    /// Responder with the built-in school rules and no latency.
    pub fn new() -> Self {
        Self::default()
    }

    /// Delay every reply by `latency`, so the loading indicator is visible.
    #[must_use]
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Add a rule ahead of the built-in ones.
    #[must_use]
    pub fn with_rule(mut self, keywords: &[&str], reply: impl Into<String>) -> Self {
        let keywords = keywords.iter().map(|k| k.to_lowercase()).collect();
        self.rules.insert(0, (keywords, reply.into()));
        self
    }

    /// Reply for `message`, without latency.
    pub fn answer(&self, message: &str) -> &str {
        let message = message.to_lowercase();
        self.rules
            .iter()
            .find(|(keywords, _)| keywords.iter().any(|k| message.contains(k.as_str())))
            .map_or(self.fallback.as_str(), |(_, reply)| reply.as_str())
    }
}

impl Transport for CannedTransport {
    type Error = Infallible;

    async fn post_message(&self, message: &str, history: &[Message]) -> Result<String, Infallible> {
        tracing::debug!(history_len = history.len(), "answering from canned rules");
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        Ok(self.answer(message).to_string())
    }
}
