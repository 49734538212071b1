//! Shared constants for the page utilities: colors, selectors, timings, CSS.

// ── Formatting ──────────────────────────────────────────────────

/// Prefix for every formatted currency amount.
pub const CURRENCY_SYMBOL: &str = "₹";

// ── Network ─────────────────────────────────────────────────────

/// Content type sent with every API request.
pub const JSON_CONTENT_TYPE: &str = "application/json";

// ── Routes ──────────────────────────────────────────────────────

pub const HOME_PATH: &str = "/";
pub const APPLIANCES_PATH: &str = "/appliances";
pub const SCHEDULER_PATH: &str = "/scheduler";
pub const DASHBOARD_PATH: &str = "/dashboard";

// ── Navigation ──────────────────────────────────────────────────

pub const NAV_LINK_SELECTOR: &str = ".nav-link";

/// Text color applied to the link that matches the current page.
pub const ACTIVE_LINK_COLOR: &str = "#667eea";

pub const ACTIVE_LINK_WEIGHT: &str = "bold";

// ── Loading indicator ───────────────────────────────────────────

pub const LOADING_SELECTOR: &str = ".loading";

pub const LOADING_MARKUP: &str = r#"<div class="loading">Loading...</div>"#;

// ── Toasts ──────────────────────────────────────────────────────

/// How long a toast stays fully visible before its exit animation starts.
pub const TOAST_VISIBLE_MS: u32 = 3_000;

/// Length of the exit animation; the toast is removed once it finishes.
pub const TOAST_EXIT_MS: u32 = 300;

pub const TOAST_SUCCESS_BACKGROUND: &str = "#51cf66";
pub const TOAST_ERROR_BACKGROUND: &str = "#ff6b6b";

pub const TOAST_ENTER_ANIMATION: &str = "slideIn 0.3s ease-out";
pub const TOAST_EXIT_ANIMATION: &str = "slideOut 0.3s ease-out";

// ── Card reveal ─────────────────────────────────────────────────

pub const CARD_SELECTOR: &str = ".card, .appliance-card, .stat-card";

/// Fraction of a card that must be visible before it fades in.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Shrinks the viewport bottom so cards reveal slightly after entering.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

pub const REVEAL_ANIMATION: &str = "fadeInUp 0.6s ease-out forwards";

// ── Injected stylesheets ────────────────────────────────────────

pub const FADE_IN_STYLES: &str = "
    @keyframes fadeInUp {
        from {
            opacity: 0;
            transform: translateY(30px);
        }
        to {
            opacity: 1;
            transform: translateY(0);
        }
    }
";

pub const TOAST_STYLES: &str = "
    @keyframes slideIn {
        from {
            transform: translateX(400px);
            opacity: 0;
        }
        to {
            transform: translateX(0);
            opacity: 1;
        }
    }
    @keyframes slideOut {
        from {
            transform: translateX(0);
            opacity: 1;
        }
        to {
            transform: translateX(400px);
            opacity: 0;
        }
    }
    .loading {
        text-align: center;
        padding: 2rem;
        color: #667eea;
        font-size: 1.2rem;
    }
";

/// Logged once the page utilities are installed.
pub const INIT_MESSAGE: &str = "Smart Energy Scheduler initialized ⚡";
