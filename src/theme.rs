use stylist::yew::Global;
use yew::prelude::*;

/// Design tokens and component styles for the whole site.
///
/// Colour palette, type scale, spacing rhythm, shadows, and keyframes are
/// declared once as custom properties; components reference semantic class
/// names only. Ink/slate/stone/cloud/grid are the neutrals, eucalypt/ocean/
/// ochre the accent triads.
const GLOBAL_CSS: &str = r#"
:root {
    --color-ink: #0F172A;
    --color-slate: #1E293B;
    --color-slate-600: #475569;
    --color-stone: #64748B;
    --color-cloud: #F8FAFC;
    --color-grid: #E2E8F0;
    --color-eucalypt: #059669;
    --color-eucalypt-light: #D1FAE5;
    --color-eucalypt-dark: #047857;
    --color-ocean: #2563EB;
    --color-ocean-light: #DBEAFE;
    --color-ocean-dark: #1D4ED8;
    --color-ochre: #D97706;
    --color-ochre-light: #FEF3C7;
    --color-ochre-dark: #B45309;
    --color-rust: #EF4444;

    --font-serif: "Instrument Serif", Georgia, serif;
    --font-sans: "Inter", -apple-system, BlinkMacSystemFont, sans-serif;
    --font-mono: "JetBrains Mono", "Fira Code", monospace;

    --text-display: 3.5rem;
    --text-h1: 3.5rem;
    --text-h2: 2.5rem;
    --text-h3: 1.75rem;
    --text-h4: 1.25rem;
    --text-body: 1.0625rem;
    --text-small: 0.875rem;
    --text-caption: 0.75rem;

    --radius: 6px;
    --radius-lg: 8px;
    --radius-xl: 12px;

    --shadow-card: 0 1px 3px rgba(0, 0, 0, 0.05);
    --shadow-card-hover: 0 4px 12px rgba(0, 0, 0, 0.08);
    --shadow-button: 0 1px 2px rgba(0, 0, 0, 0.05);
    --shadow-button-hover: 0 4px 8px rgba(0, 0, 0, 0.1);
}

* {
    margin: 0;
    padding: 0;
    box-sizing: border-box;
}

body {
    font-family: var(--font-sans);
    font-size: var(--text-body);
    line-height: 1.6;
    color: var(--color-ink);
    background: #ffffff;
}

.site-main {
    min-height: 60vh;
}

h1, h2, h3 {
    font-family: var(--font-serif);
    font-weight: 400;
}

a {
    color: inherit;
    text-decoration: none;
}

ul {
    list-style: none;
}

.container {
    max-width: 80rem;
    margin: 0 auto;
    padding: 0 1.5rem;
}

.container--narrow {
    max-width: 56rem;
}

.eyebrow {
    display: block;
    font-size: 0.8125rem;
    font-weight: 600;
    letter-spacing: 0.05em;
    text-transform: uppercase;
    color: var(--color-ocean);
    margin-bottom: 0.5rem;
}

@keyframes fade-up {
    0% { opacity: 0; transform: translateY(8px); }
    100% { opacity: 1; transform: translateY(0); }
}

@keyframes draw-line {
    0% { stroke-dashoffset: 100%; }
    100% { stroke-dashoffset: 0%; }
}

.section {
    padding: 4rem 0;
    background: #ffffff;
}

.section--muted {
    background: var(--color-cloud);
}

.section--dark {
    background: var(--color-ink);
    color: #ffffff;
}

.section--dark .section-title {
    color: #ffffff;
}

.section--grid {
    background-color: var(--color-cloud);
    background-image:
        linear-gradient(var(--color-grid) 1px, transparent 1px),
        linear-gradient(90deg, var(--color-grid) 1px, transparent 1px);
    background-size: 48px 48px;
}

.section--large {
    padding: 5rem 0;
}

.section-header {
    margin-bottom: 3rem;
    animation: fade-up 0.3s ease-out forwards;
}

.section-header--center {
    text-align: center;
}

.section-header--center .section-description {
    margin-left: auto;
    margin-right: auto;
}

.section-title {
    font-size: var(--text-h2);
    line-height: 1.2;
}

.section-title--center {
    text-align: center;
    margin-bottom: 2rem;
}

.section-description {
    margin-top: 1rem;
    color: var(--color-slate-600);
    max-width: 65ch;
}

.section-body {
    color: var(--color-slate-600);
    max-width: 65ch;
}

.section-cta {
    margin-top: 2.5rem;
    display: flex;
    justify-content: center;
    gap: 1rem;
    flex-wrap: wrap;
}

.btn {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    gap: 0.5rem;
    font-family: var(--font-sans);
    font-weight: 500;
    font-size: var(--text-body);
    border-radius: var(--radius);
    border: none;
    cursor: pointer;
    padding: 0.75rem 1.5rem;
    transition: all 150ms ease;
}

.btn--primary {
    background: var(--color-ocean);
    color: #ffffff;
    box-shadow: var(--shadow-button);
}

.btn--primary:hover {
    background: var(--color-ocean-dark);
    box-shadow: var(--shadow-button-hover);
    transform: translateY(-1px);
}

.btn--secondary {
    background: transparent;
    color: var(--color-ink);
    border: 2px solid var(--color-ink);
}

.btn--secondary:hover {
    background: var(--color-cloud);
}

.btn--ghost {
    background: transparent;
    color: var(--color-ocean);
    padding: 0;
}

.btn--ghost:hover {
    color: var(--color-ocean-dark);
}

.btn--sm {
    padding: 0.5rem 1rem;
    font-size: var(--text-small);
}

.btn--lg {
    padding: 1rem 2rem;
}

.btn--inverse {
    border-color: #ffffff;
    color: #ffffff;
}

.btn--inverse:hover {
    background: rgba(255, 255, 255, 0.1);
}

.btn--block {
    display: flex;
    width: 100%;
}

.btn-arrow {
    margin-left: 0.25rem;
}

.card {
    background: #ffffff;
    border: 1px solid var(--color-grid);
    border-radius: var(--radius-lg);
    padding: 1.5rem;
    box-shadow: var(--shadow-card);
}

.card--eucalypt {
    background: var(--color-eucalypt-light);
    border: none;
}

.card--ocean {
    background: var(--color-ocean-light);
    border: none;
}

.card--ochre {
    background: var(--color-ochre-light);
    border: none;
}

.card--outline {
    background: transparent;
    box-shadow: none;
}

.card-title {
    font-size: var(--text-h4);
    font-family: var(--font-serif);
    margin-bottom: 0.5rem;
}

.card-description {
    color: var(--color-slate-600);
}

.feature-card {
    display: block;
    background: #ffffff;
    border: 1px solid var(--color-grid);
    border-radius: var(--radius-lg);
    padding: 1.5rem;
    padding-top: 0;
    overflow: hidden;
}

.feature-card--link {
    transition: all 200ms ease;
}

.feature-card--link:hover {
    box-shadow: var(--shadow-card-hover);
    transform: translateY(-2px);
}

.feature-card-more {
    display: inline-flex;
    align-items: center;
    margin-top: 1rem;
    color: var(--color-ocean);
    font-size: var(--text-small);
    font-weight: 500;
}

.stripe {
    height: 4px;
    margin: 0 -1.5rem 1.5rem;
}

.stripe--thick {
    height: 6px;
    margin: 0;
}

.stripe--eucalypt { background: var(--color-eucalypt); }
.stripe--ocean { background: var(--color-ocean); }
.stripe--ochre { background: var(--color-ochre); }
.stripe--stone { background: var(--color-stone); }

.quote-card {
    border-left: 4px solid var(--color-grid);
    padding: 0.5rem 0 0.5rem 1rem;
    font-style: italic;
    color: var(--color-slate-600);
}

.badge {
    display: inline-flex;
    align-items: center;
    font-weight: 500;
    font-size: var(--text-small);
    border-radius: 9999px;
    padding: 0.25rem 0.625rem;
    background: var(--color-cloud);
    color: var(--color-slate-600);
}

.badge--eucalypt {
    background: var(--color-eucalypt-light);
    color: var(--color-eucalypt);
}

.badge--ocean {
    background: var(--color-ocean-light);
    color: var(--color-ocean);
}

.badge--ochre {
    background: var(--color-ochre-light);
    color: var(--color-ochre);
}

.badge--outline {
    background: transparent;
    border: 1px solid var(--color-grid);
}

.badge--sm {
    padding: 0.125rem 0.5rem;
    font-size: var(--text-caption);
}

.proof-chip {
    display: inline-flex;
    align-items: center;
    gap: 0.375rem;
    font-size: var(--text-small);
    color: var(--color-stone);
}

.proof-chip-check {
    color: var(--color-eucalypt);
    font-weight: 700;
}

.site-header {
    position: sticky;
    top: 0;
    z-index: 50;
    background: rgba(255, 255, 255, 0.95);
    backdrop-filter: blur(4px);
    border-bottom: 1px solid var(--color-grid);
}

.site-nav {
    display: flex;
    align-items: center;
    justify-content: space-between;
    height: 4rem;
}

.nav-logo {
    font-family: var(--font-serif);
    font-size: 1.25rem;
    color: var(--color-ink);
}

.nav-desktop {
    display: none;
    align-items: center;
    gap: 2rem;
}

.nav-links {
    display: flex;
    align-items: center;
    gap: 1.5rem;
}

.nav-link {
    font-size: var(--text-small);
    font-weight: 500;
    color: var(--color-slate-600);
    transition: color 150ms ease;
}

.nav-link:hover {
    color: var(--color-ink);
}

.burger {
    display: flex;
    flex-direction: column;
    justify-content: center;
    gap: 5px;
    background: none;
    border: none;
    cursor: pointer;
    padding: 0.5rem;
}

.burger span {
    display: block;
    width: 22px;
    height: 2px;
    background: var(--color-ink);
    transition: transform 200ms ease, opacity 200ms ease;
}

.burger--open span:nth-child(1) {
    transform: translateY(7px) rotate(45deg);
}

.burger--open span:nth-child(2) {
    opacity: 0;
}

.burger--open span:nth-child(3) {
    transform: translateY(-7px) rotate(-45deg);
}

.mobile-menu {
    position: fixed;
    inset: 4rem 0 0 0;
    background: #ffffff;
    z-index: 40;
    opacity: 0;
    pointer-events: none;
    transition: opacity 200ms ease;
}

.mobile-menu--open {
    opacity: 1;
    pointer-events: auto;
}

.mobile-menu-links {
    display: flex;
    flex-direction: column;
    gap: 1rem;
    padding: 1.5rem 0;
}

.mobile-menu-link {
    display: block;
    font-size: 1.125rem;
    font-weight: 500;
    color: var(--color-ink);
    padding: 0.5rem 0;
}

.mobile-menu-cta {
    padding-top: 1rem;
    border-top: 1px solid var(--color-grid);
}

@media (min-width: 768px) {
    .nav-desktop { display: flex; }
    .burger { display: none; }
    .mobile-menu { display: none; }
    .section { padding: 6rem 0; }
    .section--large { padding: 8rem 0; }
}

.site-footer {
    background: var(--color-ink);
    color: #ffffff;
    padding: 3rem 0;
}

.footer-grid {
    display: grid;
    grid-template-columns: repeat(2, 1fr);
    gap: 2rem;
}

@media (min-width: 768px) {
    .footer-grid { grid-template-columns: repeat(5, 1fr); gap: 3rem; }
    .site-footer { padding: 4rem 0; }
}

.footer-brand {
    grid-column: span 2;
}

@media (min-width: 768px) {
    .footer-brand { grid-column: span 1; }
}

.footer-logo {
    font-family: var(--font-serif);
    font-size: 1.25rem;
    color: #ffffff;
}

.footer-tagline {
    margin-top: 1rem;
    font-size: var(--text-small);
    color: var(--color-stone);
    max-width: 20rem;
}

.footer-heading {
    font-family: var(--font-sans);
    font-weight: 600;
    font-size: var(--text-small);
    margin-bottom: 1rem;
}

.footer-links {
    display: flex;
    flex-direction: column;
    gap: 0.75rem;
}

.footer-link {
    font-size: var(--text-small);
    color: var(--color-stone);
    transition: color 150ms ease;
}

.footer-link:hover {
    color: #ffffff;
}

.footer-bottom {
    margin-top: 3rem;
    padding-top: 2rem;
    border-top: 1px solid var(--color-slate);
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 1rem;
}

@media (min-width: 768px) {
    .footer-bottom { flex-direction: row; justify-content: space-between; }
}

.footer-copyright {
    font-size: var(--text-small);
    color: var(--color-stone);
}

.footer-bottom-links {
    display: flex;
    gap: 1.5rem;
}

.hero {
    padding: 5rem 0;
}

.hero-inner {
    max-width: 48rem;
    margin: 0 auto;
    text-align: center;
    animation: fade-up 0.3s ease-out forwards;
}

.hero-title {
    font-size: 2.25rem;
    line-height: 1.1;
    margin-top: 1rem;
}

.hero-lede {
    margin: 1.5rem auto 0;
    color: var(--color-slate-600);
    max-width: 42rem;
}

.hero-actions {
    margin-top: 2rem;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    gap: 1rem;
}

.hero-chips {
    margin-top: 2.5rem;
    display: flex;
    flex-wrap: wrap;
    align-items: center;
    justify-content: center;
    gap: 0.75rem 1.5rem;
}

@media (min-width: 768px) {
    .hero { padding: 8rem 0; }
    .hero-title { font-size: var(--text-h1); }
    .hero-actions { flex-direction: row; }
}

.page-hero {
    max-width: 48rem;
    margin: 0 auto;
    text-align: center;
    animation: fade-up 0.3s ease-out forwards;
}

.page-hero--left {
    margin: 0;
    text-align: left;
}

.page-hero--left .hero-actions {
    justify-content: flex-start;
}

.page-title {
    font-size: 2.25rem;
    line-height: 1.1;
    margin-top: 1rem;
}

@media (min-width: 768px) {
    .page-title { font-size: var(--text-h1); }
}

.page-lede {
    margin-top: 1.5rem;
    color: var(--color-slate-600);
}

.problem-grid {
    display: grid;
    gap: 3rem;
}

.problem-quotes {
    display: flex;
    flex-direction: column;
    gap: 1rem;
}

.benefit-grid {
    display: grid;
    gap: 1.5rem;
}

.benefit-card {
    text-align: center;
}

.pack-grid {
    display: grid;
    gap: 1.5rem;
}

.pack-card {
    background: #ffffff;
    border: 1px solid var(--color-grid);
    border-radius: var(--radius-lg);
    overflow: hidden;
}

.pack-body {
    padding: 1.5rem;
}

.pack-tags {
    display: flex;
    flex-wrap: wrap;
    gap: 0.5rem;
    margin-top: 1rem;
}

.pack-columns {
    display: grid;
    gap: 2rem;
}

.pack-column-items {
    display: flex;
    flex-direction: column;
    gap: 0.75rem;
    margin-top: 1rem;
    color: var(--color-slate-600);
}

.pack-column-items li {
    display: flex;
    align-items: flex-start;
    gap: 0.75rem;
}

.dot {
    width: 6px;
    height: 6px;
    border-radius: 50%;
    background: var(--color-ocean);
    margin-top: 0.6rem;
    flex-shrink: 0;
}

@media (min-width: 768px) {
    .problem-grid { grid-template-columns: 1fr 1fr; gap: 4rem; }
    .benefit-grid { grid-template-columns: repeat(4, 1fr); }
    .pack-grid { grid-template-columns: 1fr 1fr; }
    .pack-columns { grid-template-columns: repeat(3, 1fr); }
}

.steps-desktop {
    display: none;
    position: relative;
    justify-content: space-between;
    align-items: flex-start;
}

.steps-track {
    position: absolute;
    top: 1.5rem;
    left: 10%;
    right: 10%;
    height: 1px;
    background: var(--color-grid);
}

.step {
    position: relative;
    z-index: 1;
    width: 20%;
    display: flex;
    flex-direction: column;
    align-items: center;
    text-align: center;
}

.step-number {
    width: 3rem;
    height: 3rem;
    border-radius: 50%;
    background: var(--color-ocean);
    color: #ffffff;
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: var(--text-small);
    font-weight: 700;
    margin-bottom: 1rem;
    flex-shrink: 0;
}

.step-description {
    font-size: var(--text-small);
    color: var(--color-slate-600);
    max-width: 180px;
}

.steps-mobile {
    display: flex;
    flex-direction: column;
    gap: 2rem;
}

.step-row {
    position: relative;
    display: flex;
    gap: 1rem;
}

.step-connector {
    position: absolute;
    left: 1.5rem;
    top: 3rem;
    width: 1px;
    height: 100%;
    background: var(--color-grid);
}

.step-row-body {
    padding-top: 0.5rem;
}

@media (min-width: 768px) {
    .steps-desktop { display: flex; }
    .steps-mobile { display: none; }
}

.diff-grid {
    display: grid;
    gap: 1.5rem;
}

@media (min-width: 768px) {
    .diff-grid { grid-template-columns: 1fr 1fr; }
}

.diff-card {
    padding: 1.5rem;
    border-radius: var(--radius-lg);
    background: #ffffff;
    border: 1px solid var(--color-grid);
}

.diff-card--tinted {
    background: var(--color-cloud);
    border: none;
}

.diff-statement {
    font-family: var(--font-serif);
    font-size: var(--text-h4);
    margin-bottom: 0.5rem;
}

.slo-card {
    max-width: 42rem;
    margin: 0 auto;
    background: #ffffff;
    border: 1px solid var(--color-grid);
    border-radius: var(--radius-lg);
    overflow: hidden;
}

.slo-table {
    width: 100%;
    border-collapse: collapse;
    font-size: var(--text-small);
}

.slo-table th {
    text-align: left;
    font-weight: 600;
    padding: 1rem;
    background: var(--color-cloud);
    color: var(--color-slate-600);
    border-bottom: 1px solid var(--color-grid);
}

.slo-table td {
    padding: 1rem;
    border-bottom: 1px solid var(--color-grid);
}

.slo-table tbody tr:last-child td {
    border-bottom: none;
}

.slo-target {
    text-align: right;
    font-family: var(--font-mono);
    color: var(--color-ocean);
}

.security-note {
    margin-top: 1.5rem;
    font-size: var(--text-small);
    color: var(--color-stone);
    text-align: center;
}

.pillar-grid {
    display: grid;
    gap: 1.5rem;
}

@media (min-width: 768px) {
    .pillar-grid { grid-template-columns: repeat(3, 1fr); }
}

.pillar-card {
    display: flex;
    flex-direction: column;
}

.pillar-card .card-description {
    flex: 1;
}

.pillar-outcome {
    margin-top: 1rem;
    padding-top: 1rem;
    border-top: 1px solid rgba(15, 23, 42, 0.1);
    font-size: var(--text-small);
    font-weight: 500;
}

.solutions-grid {
    display: grid;
    gap: 1.5rem;
}

@media (min-width: 768px) {
    .solutions-grid { grid-template-columns: 1fr 1fr; }
}

@media (min-width: 1024px) {
    .solutions-grid { grid-template-columns: repeat(4, 1fr); }
}

.closing-cta {
    background: var(--color-ink);
    color: #ffffff;
    padding: 5rem 0;
    text-align: center;
}

.closing-cta-title {
    font-size: var(--text-h2);
    margin-bottom: 1rem;
}

.closing-cta-lede {
    color: var(--color-stone);
    max-width: 42rem;
    margin: 0 auto 2rem;
}

.code-block {
    border-radius: var(--radius-lg);
    overflow: hidden;
}

.code-block-header {
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 0.5rem 1rem;
    background: var(--color-slate);
    border-bottom: 1px solid var(--color-ink);
}

.code-block-meta {
    display: flex;
    align-items: center;
    gap: 0.75rem;
}

.code-block-label {
    font-size: var(--text-small);
    color: var(--color-stone);
}

.code-block-language {
    font-size: var(--text-caption);
    font-family: var(--font-mono);
    color: var(--color-stone);
    opacity: 0.6;
}

.code-block-actions {
    display: flex;
    align-items: center;
    gap: 0.5rem;
}

.code-block-button {
    background: none;
    border: none;
    cursor: pointer;
    padding: 0.375rem;
    font-size: var(--text-small);
    color: var(--color-stone);
    transition: color 150ms ease;
}

.code-block-button:hover {
    color: #ffffff;
}

.code-block-button--copied {
    color: var(--color-eucalypt);
}

.code-block-body {
    background: var(--color-ink);
    padding: 1rem;
    overflow-x: auto;
    font-size: var(--text-small);
}

.code-block-body code {
    font-family: var(--font-mono);
    color: var(--color-cloud);
}

.code-block-collapsed {
    background: var(--color-ink);
    padding: 0.75rem 1rem;
}

.code-block-expand {
    background: none;
    border: none;
    cursor: pointer;
    font-size: var(--text-small);
    color: var(--color-stone);
    transition: color 150ms ease;
}

.code-block-expand:hover {
    color: #ffffff;
}

.calendly-frame {
    border: 1px solid var(--color-grid);
    border-radius: var(--radius-xl);
    overflow: hidden;
    background: #ffffff;
}

.calendly-fallback {
    padding: 1rem;
    text-align: center;
    font-size: var(--text-small);
}

.calendly-fallback a {
    color: var(--color-ocean);
    font-weight: 500;
}

.calendly-fallback a:hover {
    color: var(--color-ocean-dark);
}

.email-section {
    margin-top: 3rem;
    padding-top: 3rem;
    border-top: 1px solid var(--color-grid);
}

.email-cards {
    display: grid;
    gap: 1.5rem;
    max-width: 42rem;
    margin: 0 auto;
}

@media (min-width: 640px) {
    .email-cards { grid-template-columns: 1fr 1fr; }
}

.email-card {
    padding: 1.5rem;
    background: var(--color-cloud);
    border-radius: var(--radius-lg);
    text-align: center;
}

.email-link {
    color: var(--color-ocean);
}

.email-link:hover {
    color: var(--color-ocean-dark);
}

.expect-list {
    display: flex;
    flex-direction: column;
    gap: 1.5rem;
}

.expect-item {
    display: flex;
    gap: 1.5rem;
    padding: 1.5rem;
    background: #ffffff;
    border: 1px solid var(--color-grid);
    border-radius: var(--radius-lg);
}

.expect-number {
    font-family: var(--font-serif);
    font-size: var(--text-h3);
    color: var(--color-ocean);
    flex-shrink: 0;
}

.video-placeholder {
    aspect-ratio: 16 / 9;
    background: var(--color-slate);
    border-radius: var(--radius-xl);
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    margin-bottom: 2rem;
}

.video-placeholder-title {
    font-family: var(--font-serif);
    font-size: var(--text-h3);
    color: #ffffff;
    margin-bottom: 0.5rem;
}

.video-placeholder-note {
    color: var(--color-stone);
}

.walkthrough-grid {
    display: grid;
    gap: 1rem;
}

@media (min-width: 640px) {
    .walkthrough-grid { grid-template-columns: 1fr 1fr; }
}

@media (min-width: 1024px) {
    .walkthrough-grid { grid-template-columns: repeat(3, 1fr); }
}

.walkthrough-item {
    display: flex;
    gap: 1rem;
    padding: 1rem;
    background: var(--color-cloud);
    border-radius: var(--radius-lg);
}

.walkthrough-time {
    font-family: var(--font-mono);
    font-size: var(--text-small);
    color: var(--color-ocean);
    flex-shrink: 0;
}

.walkthrough-title {
    font-family: var(--font-sans);
    font-size: var(--text-small);
    font-weight: 600;
}

.walkthrough-description {
    font-size: var(--text-small);
    color: var(--color-slate-600);
    margin-top: 0.25rem;
}

.demo-checklist-card {
    margin-top: 2rem;
    padding: 1.5rem;
    background: #ffffff;
    border: 1px solid var(--color-grid);
    border-radius: var(--radius-lg);
}

.demo-checklist {
    display: grid;
    gap: 0.75rem;
    margin-top: 1rem;
    color: var(--color-slate-600);
}

@media (min-width: 640px) {
    .demo-checklist { grid-template-columns: 1fr 1fr; }
}

.demo-checklist li {
    display: flex;
    align-items: flex-start;
    gap: 0.5rem;
}

.check {
    color: var(--color-eucalypt);
}
"#;

#[function_component(GlobalStyles)]
pub fn global_styles() -> Html {
    html! { <Global css={GLOBAL_CSS} /> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stylesheet_braces_are_balanced() {
        let open = GLOBAL_CSS.matches('{').count();
        let close = GLOBAL_CSS.matches('}').count();
        assert_eq!(open, close);
    }

    #[test]
    fn palette_tokens_match_the_design_system() {
        for token in [
            "--color-ink: #0F172A",
            "--color-eucalypt: #059669",
            "--color-ocean: #2563EB",
            "--color-ochre: #D97706",
        ] {
            assert!(GLOBAL_CSS.contains(token), "missing token: {token}");
        }
    }
}
