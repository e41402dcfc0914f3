//! Display labels per locale.
//!
//! Only user-facing text is localized. JSON output always uses the English
//! field names from `kart-core`.

use kart_core::StatKey;

/// Output language.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    clap::ValueEnum,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Locale {
    #[default]
    En,
    Ja,
}

impl Locale {
    pub fn stat_label(self, key: StatKey) -> &'static str {
        match (self, key) {
            (Locale::En, StatKey::Road) => "Speed (road)",
            (Locale::En, StatKey::Terrain) => "Speed (terrain)",
            (Locale::En, StatKey::Water) => "Speed (water)",
            (Locale::En, StatKey::Unknown) => "Unknown",
            (Locale::En, StatKey::Accel) => "Acceleration",
            (Locale::En, StatKey::Weight) => "Weight",
            (Locale::En, StatKey::Handling) => "Handling",
            (Locale::Ja, StatKey::Road) => "速度(舗装)",
            (Locale::Ja, StatKey::Terrain) => "速度(オフ)",
            (Locale::Ja, StatKey::Water) => "速度(水上)",
            (Locale::Ja, StatKey::Unknown) => "不明",
            (Locale::Ja, StatKey::Accel) => "加速",
            (Locale::Ja, StatKey::Weight) => "重さ",
            (Locale::Ja, StatKey::Handling) => "曲がりやすさ",
        }
    }

    /// Shorter header for the ranked search table.
    pub fn column_label(self, key: StatKey) -> &'static str {
        match (self, key) {
            (Locale::Ja, StatKey::Handling) => "曲がり",
            _ => self.stat_label(key),
        }
    }

    pub fn character(self) -> &'static str {
        match self {
            Locale::En => "Character",
            Locale::Ja => "キャラクター",
        }
    }

    pub fn machine(self) -> &'static str {
        match self {
            Locale::En => "Machine",
            Locale::Ja => "マシン",
        }
    }

    pub fn score(self) -> &'static str {
        match self {
            Locale::En => "Score",
            Locale::Ja => "速度スコア",
        }
    }

    /// Display name for a preset. Unrecognised presets show their own name.
    pub fn preset_label(self, name: &str) -> String {
        let known = match (self, name.to_ascii_lowercase().as_str()) {
            (Locale::En, "middleweight") => Some("Middleweight"),
            (Locale::En, "lightweight") => Some("Lightweight"),
            (Locale::En, "time_attack") => Some("Time attack"),
            (Locale::Ja, "middleweight") => Some("中量級"),
            (Locale::Ja, "lightweight") => Some("軽量級"),
            (Locale::Ja, "time_attack") => Some("タイムアタック"),
            _ => None,
        };
        known.map_or_else(|| name.to_string(), str::to_string)
    }

    pub fn threshold_header(self, key: StatKey, value: i32) -> String {
        match self {
            Locale::En => format!("Target {}: {value} or higher", self.stat_label(key)),
            Locale::Ja => format!("目標{}: {value} 以上", self.stat_label(key)),
        }
    }

    pub fn weights_header(self, road: u32, terrain: u32, water: u32) -> String {
        match self {
            Locale::En => format!("Speed weighting: road {road}%, terrain {terrain}%, water {water}%"),
            Locale::Ja => format!("速度の重視比率: 舗装道路 {road}%, オフロード {terrain}%, 水上 {water}%"),
        }
    }

    pub fn no_results(self) -> &'static str {
        match self {
            Locale::En => "No combination matches the conditions.",
            Locale::Ja => "条件に一致する組み合わせが見つかりませんでした。",
        }
    }

    pub fn truncated(self, shown: usize, total: usize) -> String {
        match self {
            Locale::En => format!("Showing {shown} of {total} combinations."),
            Locale::Ja => format!("{total} 件中 {shown} 件を表示しています。"),
        }
    }

    pub fn totals_header(self, character: &str, machine: &str) -> String {
        match self {
            Locale::En => format!("Combined stats: {character} + {machine}"),
            Locale::Ja => format!("選択したカスタムの総合性能: {character} + {machine}"),
        }
    }

    pub fn equivalents_header(self) -> &'static str {
        match self {
            Locale::En => "Combinations with identical stats",
            Locale::Ja => "同じ総合性能になる組み合わせ一覧",
        }
    }

    pub fn no_other_equivalents(self) -> &'static str {
        match self {
            Locale::En => "No other combination has the same stats.",
            Locale::Ja => "同じ性能になる他の組み合わせは見つかりませんでした。",
        }
    }

    pub fn preset(self) -> &'static str {
        match self {
            Locale::En => "Preset",
            Locale::Ja => "プリセット",
        }
    }

    pub fn value(self) -> &'static str {
        match self {
            Locale::En => "Value",
            Locale::Ja => "値",
        }
    }

    pub fn threshold_range(self, key: StatKey, min: i32, max: i32, default: i32) -> String {
        match self {
            Locale::En => format!(
                "{} threshold range: {min}..={max} (default {default})",
                self.stat_label(key)
            ),
            Locale::Ja => format!(
                "{}の入力範囲: {min}〜{max} (初期値 {default})",
                self.stat_label(key)
            ),
        }
    }

    /// Message shown when a data source cannot be loaded.
    pub fn data_unavailable(self, file: &str) -> String {
        match self {
            Locale::En => format!(
                "Error: data file unavailable: '{file}'. Place it in the data directory and try again."
            ),
            Locale::Ja => format!(
                "エラー: ファイルを読み込めません。'{file}' をデータフォルダに配置してください。"
            ),
        }
    }
}
