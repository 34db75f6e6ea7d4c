use crate::logging::LogLevel;
use serde::Deserialize;

const DEFAULT_LOADER_DELAY_MS: u32 = 1_000;
const DEFAULT_TYPING_START_DELAY_MS: u32 = 1_500;
const DEFAULT_TYPING_INTERVAL_MS: u32 = 100;
const DEFAULT_FORM_SENDING_MS: u32 = 2_000;
const DEFAULT_FORM_SENT_DISPLAY_MS: u32 = 3_000;
const DEFAULT_RESIZE_DEBOUNCE_MS: u32 = 250;
const DEFAULT_DOWNLOAD_PRESS_MS: u32 = 200;
const DEFAULT_REVEAL_OFFSET_PX: f64 = 150.0;
const DEFAULT_SECTION_OFFSET_PX: f64 = 200.0;
const DEFAULT_NAVBAR_ELEVATE_PX: f64 = 50.0;
const DEFAULT_NAVBAR_HIDE_PX: f64 = 500.0;
const DEFAULT_DESKTOP_MIN_WIDTH_PX: f64 = 768.0;
const DEFAULT_ANCHOR_HEADER_OFFSET_PX: f64 = 80.0;
const DEFAULT_CARD_TILT_DAMPING: f64 = 10.0;
const DEFAULT_ORB_SPEED_STEP: f64 = 20.0;
const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

const LOADER_DELAY_MS_BOUNDS: (u32, u32) = (0, 10_000);
const TYPING_START_DELAY_MS_BOUNDS: (u32, u32) = (0, 10_000);
const TYPING_INTERVAL_MS_BOUNDS: (u32, u32) = (10, 1_000);
const FORM_SENDING_MS_BOUNDS: (u32, u32) = (100, 30_000);
const FORM_SENT_DISPLAY_MS_BOUNDS: (u32, u32) = (100, 30_000);
const RESIZE_DEBOUNCE_MS_BOUNDS: (u32, u32) = (0, 2_000);
const DOWNLOAD_PRESS_MS_BOUNDS: (u32, u32) = (0, 2_000);
const REVEAL_OFFSET_PX_BOUNDS: (f64, f64) = (0.0, 1_000.0);
const SECTION_OFFSET_PX_BOUNDS: (f64, f64) = (0.0, 1_000.0);
const NAVBAR_ELEVATE_PX_BOUNDS: (f64, f64) = (0.0, 1_000.0);
const NAVBAR_HIDE_PX_BOUNDS: (f64, f64) = (0.0, 5_000.0);
const DESKTOP_MIN_WIDTH_PX_BOUNDS: (f64, f64) = (320.0, 2_560.0);
const ANCHOR_HEADER_OFFSET_PX_BOUNDS: (f64, f64) = (0.0, 400.0);
const CARD_TILT_DAMPING_BOUNDS: (f64, f64) = (1.0, 100.0);
const ORB_SPEED_STEP_BOUNDS: (f64, f64) = (0.0, 200.0);

/// Timings and thresholds for every page behavior.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BehaviorConfig {
    pub loader_delay_ms: u32,
    pub typing_start_delay_ms: u32,
    pub typing_interval_ms: u32,
    pub form_sending_ms: u32,
    pub form_sent_display_ms: u32,
    pub resize_debounce_ms: u32,
    pub download_press_ms: u32,
    pub reveal_offset_px: f64,
    pub section_offset_px: f64,
    pub navbar_elevate_px: f64,
    pub navbar_hide_px: f64,
    pub desktop_min_width_px: f64,
    pub anchor_header_offset_px: f64,
    pub card_tilt_damping: f64,
    pub orb_speed_step: f64,
    pub log_level: LogLevel,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            loader_delay_ms: DEFAULT_LOADER_DELAY_MS,
            typing_start_delay_ms: DEFAULT_TYPING_START_DELAY_MS,
            typing_interval_ms: DEFAULT_TYPING_INTERVAL_MS,
            form_sending_ms: DEFAULT_FORM_SENDING_MS,
            form_sent_display_ms: DEFAULT_FORM_SENT_DISPLAY_MS,
            resize_debounce_ms: DEFAULT_RESIZE_DEBOUNCE_MS,
            download_press_ms: DEFAULT_DOWNLOAD_PRESS_MS,
            reveal_offset_px: DEFAULT_REVEAL_OFFSET_PX,
            section_offset_px: DEFAULT_SECTION_OFFSET_PX,
            navbar_elevate_px: DEFAULT_NAVBAR_ELEVATE_PX,
            navbar_hide_px: DEFAULT_NAVBAR_HIDE_PX,
            desktop_min_width_px: DEFAULT_DESKTOP_MIN_WIDTH_PX,
            anchor_header_offset_px: DEFAULT_ANCHOR_HEADER_OFFSET_PX,
            card_tilt_damping: DEFAULT_CARD_TILT_DAMPING,
            orb_speed_step: DEFAULT_ORB_SPEED_STEP,
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

#[derive(Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawBehaviorConfig {
    loader_delay_ms: Option<f64>,
    typing_start_delay_ms: Option<f64>,
    typing_interval_ms: Option<f64>,
    form_sending_ms: Option<f64>,
    form_sent_display_ms: Option<f64>,
    resize_debounce_ms: Option<f64>,
    download_press_ms: Option<f64>,
    reveal_offset_px: Option<f64>,
    section_offset_px: Option<f64>,
    navbar_elevate_px: Option<f64>,
    navbar_hide_px: Option<f64>,
    desktop_min_width_px: Option<f64>,
    anchor_header_offset_px: Option<f64>,
    card_tilt_damping: Option<f64>,
    orb_speed_step: Option<f64>,
    log_level: Option<String>,
}

impl BehaviorConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let raw: RawBehaviorConfig = serde_json::from_str(raw)?;
        Ok(Self::from_raw(raw))
    }

    /// Resolves the optional page-embedded override block, falling back to defaults.
    pub fn from_page_json(raw: Option<&str>) -> (Self, Option<serde_json::Error>) {
        let Some(raw) = raw.map(str::trim).filter(|value| !value.is_empty()) else {
            return (Self::default(), None);
        };

        match Self::from_json(raw) {
            Ok(config) => (config, None),
            Err(error) => (Self::default(), Some(error)),
        }
    }

    fn from_raw(raw: RawBehaviorConfig) -> Self {
        Self {
            loader_delay_ms: ms_with_bounds(
                raw.loader_delay_ms,
                DEFAULT_LOADER_DELAY_MS,
                LOADER_DELAY_MS_BOUNDS,
            ),
            typing_start_delay_ms: ms_with_bounds(
                raw.typing_start_delay_ms,
                DEFAULT_TYPING_START_DELAY_MS,
                TYPING_START_DELAY_MS_BOUNDS,
            ),
            typing_interval_ms: ms_with_bounds(
                raw.typing_interval_ms,
                DEFAULT_TYPING_INTERVAL_MS,
                TYPING_INTERVAL_MS_BOUNDS,
            ),
            form_sending_ms: ms_with_bounds(
                raw.form_sending_ms,
                DEFAULT_FORM_SENDING_MS,
                FORM_SENDING_MS_BOUNDS,
            ),
            form_sent_display_ms: ms_with_bounds(
                raw.form_sent_display_ms,
                DEFAULT_FORM_SENT_DISPLAY_MS,
                FORM_SENT_DISPLAY_MS_BOUNDS,
            ),
            resize_debounce_ms: ms_with_bounds(
                raw.resize_debounce_ms,
                DEFAULT_RESIZE_DEBOUNCE_MS,
                RESIZE_DEBOUNCE_MS_BOUNDS,
            ),
            download_press_ms: ms_with_bounds(
                raw.download_press_ms,
                DEFAULT_DOWNLOAD_PRESS_MS,
                DOWNLOAD_PRESS_MS_BOUNDS,
            ),
            reveal_offset_px: px_with_bounds(
                raw.reveal_offset_px,
                DEFAULT_REVEAL_OFFSET_PX,
                REVEAL_OFFSET_PX_BOUNDS,
            ),
            section_offset_px: px_with_bounds(
                raw.section_offset_px,
                DEFAULT_SECTION_OFFSET_PX,
                SECTION_OFFSET_PX_BOUNDS,
            ),
            navbar_elevate_px: px_with_bounds(
                raw.navbar_elevate_px,
                DEFAULT_NAVBAR_ELEVATE_PX,
                NAVBAR_ELEVATE_PX_BOUNDS,
            ),
            navbar_hide_px: px_with_bounds(
                raw.navbar_hide_px,
                DEFAULT_NAVBAR_HIDE_PX,
                NAVBAR_HIDE_PX_BOUNDS,
            ),
            desktop_min_width_px: px_with_bounds(
                raw.desktop_min_width_px,
                DEFAULT_DESKTOP_MIN_WIDTH_PX,
                DESKTOP_MIN_WIDTH_PX_BOUNDS,
            ),
            anchor_header_offset_px: px_with_bounds(
                raw.anchor_header_offset_px,
                DEFAULT_ANCHOR_HEADER_OFFSET_PX,
                ANCHOR_HEADER_OFFSET_PX_BOUNDS,
            ),
            card_tilt_damping: px_with_bounds(
                raw.card_tilt_damping,
                DEFAULT_CARD_TILT_DAMPING,
                CARD_TILT_DAMPING_BOUNDS,
            ),
            orb_speed_step: px_with_bounds(
                raw.orb_speed_step,
                DEFAULT_ORB_SPEED_STEP,
                ORB_SPEED_STEP_BOUNDS,
            ),
            log_level: raw
                .log_level
                .as_deref()
                .and_then(LogLevel::from_str)
                .unwrap_or(DEFAULT_LOG_LEVEL),
        }
    }
}

fn ms_with_bounds(value: Option<f64>, default: u32, bounds: (u32, u32)) -> u32 {
    value
        .filter(|value| value.is_finite() && value.fract() == 0.0)
        .filter(|value| (f64::from(bounds.0)..=f64::from(bounds.1)).contains(value))
        .map(|value| value as u32)
        .unwrap_or(default)
}

fn px_with_bounds(value: Option<f64>, default: f64, bounds: (f64, f64)) -> f64 {
    value
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}
