// Components module - the panels of the dashboard
//
// - Title bar: headline and key hints
// - Amount panels: one per currency
// - Countdown panel: time to the next doubling
// - Info panel: the fixed inputs
// - Disclaimer: satire notice and footnote
// - Logs panel: system log tail (toggle)
// - Status bar: uptime and tick counters
// - Toast: transient overlay

pub mod amount_panel;
pub mod countdown_panel;
pub mod disclaimer;
pub mod info_panel;
pub mod logs_panel;
pub mod status_bar;
pub mod title_bar;
pub mod toast;

pub use toast::Toast;
