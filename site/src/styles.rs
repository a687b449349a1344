//! CSS for the site.
//!
//! One stylesheet, inlined into `<head>` unless
//! [`crate::PageAssets::stylesheet_href`] points at an external copy.
//!
//! # Customization
//!
//! ```rust
//! use axionix_site::styles::SITE_CSS;
//!
//! let my_css = ".hero { background: #fff; }";
//! let combined = format!("{}\n{}", SITE_CSS, my_css);
//! ```

/// Content-Security-Policy for the generated page. No scripts are needed.
pub const CSP: &str = "default-src 'self'; script-src 'none'; style-src 'self' 'unsafe-inline'; img-src 'self' data:";

/// Complete CSS for the page - light slate and navy theme.
///
/// Entry animations only apply to elements with the `reveal` class and are
/// switched off under `prefers-reduced-motion`. Animated elements are in the
/// markup from the start; the animation never gates their availability.
pub const SITE_CSS: &str = r#"
:root {
    --navy-900: #1e3a8a;
    --navy-700: #1d4ed8;
    --sky-100: #dbeafe;
    --sky-50: #eff6ff;
    --amber-400: #facc15;
    --slate-900: #0f172a;
    --slate-700: #334155;
    --slate-600: #475569;
    --slate-500: #64748b;
    --slate-300: #cbd5e1;
    --slate-200: #e2e8f0;
    --slate-100: #f1f5f9;
    --white: #ffffff;
    --error: #dc2626;
    --radius: 12px;
    --container-max: 1152px;
    --font-sans: 'Inter', system-ui, -apple-system, 'Segoe UI', sans-serif;
}

*, *::before, *::after {
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    margin: 0;
    min-height: 100vh;
    font-family: var(--font-sans);
    color: var(--slate-700);
    background: linear-gradient(45deg, var(--sky-50), var(--white), var(--slate-100));
    line-height: 1.5;
}

a {
    color: inherit;
    text-decoration: none;
}

.container {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 0 24px;
}

/* Navigation */
.nav {
    position: sticky;
    top: 0;
    z-index: 50;
    backdrop-filter: blur(8px);
    background: rgba(255, 255, 255, 0.7);
    border-bottom: 1px solid var(--slate-200);
    box-shadow: 0 1px 2px rgba(15, 23, 42, 0.05);
}

.nav-inner {
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding-top: 12px;
    padding-bottom: 12px;
}

.nav-brand {
    display: flex;
    align-items: center;
    gap: 8px;
    font-weight: 700;
    font-size: 1.25rem;
    letter-spacing: -0.02em;
    color: var(--navy-900);
}

.nav-logo {
    width: 32px;
    height: 32px;
    object-fit: contain;
}

.nav-links {
    display: flex;
    gap: 32px;
    font-weight: 500;
}

.nav-link:hover {
    color: var(--navy-700);
}

/* Buttons */
.btn {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    padding: 12px 24px;
    border-radius: 8px;
    font-weight: 600;
    border: 1px solid transparent;
    cursor: pointer;
    font: inherit;
}

.btn-sm {
    padding: 6px 14px;
    font-size: 0.875rem;
}

.btn-primary {
    background: var(--navy-900);
    color: var(--white);
}

.btn-primary:hover {
    background: var(--navy-700);
}

.btn-primary:disabled {
    opacity: 0.6;
    cursor: progress;
}

.btn-outline {
    border-color: var(--navy-900);
    color: var(--navy-900);
    background: transparent;
}

.btn-block {
    width: 100%;
}

/* Hero */
.hero {
    padding: 40px 0 80px;
}

.hero-grid {
    display: flex;
    flex-wrap: wrap;
    align-items: center;
    gap: 40px;
}

.hero-content {
    flex: 1 1 420px;
    display: flex;
    flex-direction: column;
    gap: 24px;
}

.hero-title {
    margin: 0;
    font-size: clamp(2.25rem, 5vw, 3rem);
    font-weight: 800;
    color: var(--navy-900);
    line-height: 1.15;
}

.hero-lead {
    margin: 0;
    font-size: 1.125rem;
    max-width: 32rem;
}

.hero-highlights {
    display: flex;
    flex-wrap: wrap;
    gap: 24px;
}

.hero-highlight {
    display: inline-flex;
    align-items: center;
    gap: 8px;
    color: var(--navy-700);
    font-weight: 600;
}

.hero-actions {
    display: flex;
    gap: 12px;
}

.hero-art {
    flex: 1 1 420px;
    position: relative;
    height: 340px;
    border-radius: 24px;
    border: 1px solid var(--slate-200);
    background: linear-gradient(135deg, rgba(191, 219, 254, 0.4), var(--white), var(--sky-100));
    box-shadow: 0 20px 25px -5px rgba(15, 23, 42, 0.1);
}

.art-truck {
    position: absolute;
    top: 40px;
    left: 40px;
    color: rgba(29, 78, 216, 0.7);
}

.art-plane {
    position: absolute;
    top: 50%;
    left: 50%;
    transform: translate(-50%, -50%);
    color: rgba(250, 204, 21, 0.7);
}

.art-ship {
    position: absolute;
    bottom: 48px;
    right: 64px;
    color: rgba(30, 58, 138, 0.8);
}

.art-tagline {
    position: absolute;
    bottom: 16px;
    left: 50%;
    transform: translateX(-50%);
    background: var(--navy-900);
    color: var(--white);
    font-size: 0.875rem;
    font-weight: 600;
    border-radius: 999px;
    padding: 4px 24px;
}

/* Sections */
.section-title {
    margin: 0 0 32px;
    font-size: 2rem;
    font-weight: 700;
    color: var(--navy-900);
}

.services {
    padding: 64px 0;
    background: var(--white);
    border-top: 1px solid var(--slate-100);
    border-bottom: 1px solid var(--slate-100);
}

.services-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
    gap: 32px;
}

.service-card {
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 16px;
    padding: 32px;
    border: 1px solid var(--slate-200);
    border-radius: var(--radius);
    background: var(--white);
    transition: box-shadow 200ms;
}

.service-card:hover {
    box-shadow: 0 20px 25px -5px rgba(15, 23, 42, 0.1);
}

.service-card[data-kind="HeavyVehicle"] .service-icon { color: var(--navy-700); }
.service-card[data-kind="Aircraft"] .service-icon { color: var(--amber-400); }
.service-card[data-kind="Marine"] .service-icon { color: var(--navy-900); }

.service-title {
    margin: 0;
    font-size: 1.25rem;
    font-weight: 600;
}

.service-description {
    margin: 0;
    text-align: center;
    color: var(--slate-600);
}

.process {
    padding: 64px 0;
    background: linear-gradient(135deg, var(--sky-50), var(--white), var(--sky-100));
}

.process-steps {
    list-style: none;
    margin: 0;
    padding: 0;
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
    gap: 32px;
    text-align: center;
}

.process-step {
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 4px;
}

.step-badge {
    width: 56px;
    height: 56px;
    border-radius: 999px;
    display: flex;
    align-items: center;
    justify-content: center;
    background: var(--navy-900);
    color: var(--white);
    font-weight: 700;
    font-size: 1.25rem;
}

.process-step[data-order="2"] .step-badge { background: var(--navy-700); }
.process-step[data-order="3"] .step-badge { background: var(--amber-400); color: var(--navy-900); }
.process-step[data-order="4"] .step-badge { background: var(--slate-300); color: var(--navy-900); }

.step-icon {
    color: var(--navy-700);
}

.step-label {
    font-weight: 600;
}

.step-description {
    font-size: 0.875rem;
    color: var(--slate-500);
}

.about {
    padding: 64px 0;
    background: var(--white);
    border-top: 1px solid var(--slate-200);
}

.about-body {
    max-width: 48rem;
    color: var(--slate-600);
    line-height: 1.75;
}

/* Contact */
.contact {
    padding: 64px 0;
    background: var(--slate-900);
    color: var(--white);
}

.contact .section-title {
    color: var(--white);
}

.contact-grid {
    display: flex;
    flex-wrap: wrap;
    gap: 40px;
    align-items: center;
}

.contact-intro {
    flex: 1 1 360px;
}

.contact-blurb {
    color: var(--slate-200);
}

.contact-links {
    display: flex;
    flex-direction: column;
    gap: 12px;
}

.contact-link {
    display: inline-flex;
    align-items: center;
    gap: 8px;
    font-size: 1.125rem;
    font-weight: 600;
}

.contact-form {
    flex: 1 1 360px;
    display: flex;
    flex-direction: column;
    gap: 16px;
    padding: 24px;
    border-radius: var(--radius);
    background: var(--white);
    color: var(--slate-900);
    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.2);
}

.form-field label {
    display: block;
    font-size: 0.875rem;
    font-weight: 600;
    color: var(--slate-700);
}

.form-field input,
.form-field textarea {
    width: 100%;
    margin-top: 4px;
    padding: 8px 12px;
    border: 1px solid var(--slate-200);
    border-radius: 8px;
    font: inherit;
}

.form-field input:focus,
.form-field textarea:focus {
    outline: none;
    box-shadow: 0 0 0 2px var(--navy-700);
}

.form-field [aria-invalid="true"] {
    border-color: var(--error);
}

.field-error {
    margin: 4px 0 0;
    font-size: 0.8125rem;
    color: var(--error);
}

.form-status {
    margin: 0;
    font-size: 0.875rem;
    color: var(--slate-600);
}

/* Entry animations */
@keyframes reveal-up {
    from { opacity: 0; transform: translateY(30px); }
    to { opacity: 1; transform: none; }
}

@keyframes reveal-zoom {
    from { opacity: 0; transform: scale(0.9); }
    to { opacity: 1; transform: none; }
}

.reveal {
    animation: reveal-up 600ms ease-out 150ms both;
}

.reveal-late {
    animation-name: reveal-zoom;
    animation-delay: 300ms;
}

@media (prefers-reduced-motion: reduce) {
    .reveal {
        animation: none;
    }
}

@media (max-width: 768px) {
    .nav-links,
    .nav-cta {
        display: none;
    }
    .hero-art {
        height: 280px;
    }
}
"#;
