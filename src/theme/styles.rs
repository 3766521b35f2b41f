//! Global CSS styles for the AION Labs site.
//!
//! Dark laboratory aesthetic: slate void, cyan signal, violet accents.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* SLATE (Backgrounds) */
  --slate-950: #020617;
  --slate-900: #0f172a;
  --slate-800: #1e293b;
  --glass: rgba(15, 23, 42, 0.4);
  --glass-border: rgba(255, 255, 255, 0.05);

  /* CYAN (Signal, Links, Particles) */
  --cyan: #22d3ee;
  --cyan-deep: #06b6d4;
  --cyan-glow: rgba(34, 211, 238, 0.3);

  /* VIOLET / PINK (Accents) */
  --violet: #8b5cf6;
  --pink: #ec4899;

  /* TEXT */
  --text-primary: #ffffff;
  --text-secondary: #94a3b8;
  --text-muted: #64748b;

  /* SEMANTIC */
  --online: #22c55e;
  --offline: #ef4444;

  /* Typography */
  --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  /* Type Scale */
  --text-xs: 0.625rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.25rem;
  --text-xl: 2rem;
  --text-2xl: 3.75rem;
  --text-3xl: 6rem;

  /* Transitions */
  --ease: cubic-bezier(0.16, 1, 0.3, 1);
  --transition-fast: 150ms ease;
  --transition-base: 300ms ease;
  --transition-slow: 700ms var(--ease);
}

/* === Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  scroll-behavior: smooth;
}

body {
  background: var(--slate-950);
  color: #e2e8f0;
  font-family: var(--font-sans);
  font-size: var(--text-base);
  line-height: 1.5;
  -webkit-font-smoothing: antialiased;
  overflow-x: hidden;
}

::selection {
  background: rgba(34, 211, 238, 0.3);
}

a {
  color: inherit;
  text-decoration: none;
}

button {
  font: inherit;
  color: inherit;
  background: none;
  border: none;
  cursor: pointer;
}

ul {
  list-style: none;
}

/* === Utilities === */
.accent-cyan { color: var(--cyan); }
.accent-violet { color: var(--violet); }
.accent-pink { color: var(--pink); }

.gradient-text {
  background: linear-gradient(90deg, var(--cyan), var(--violet));
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

.reveal {
  opacity: 0;
  animation: reveal 0.8s var(--ease) forwards;
}

@keyframes reveal {
  from { opacity: 0; transform: translateY(30px); }
  to { opacity: 1; transform: translateY(0); }
}

@keyframes fade-in {
  from { opacity: 0; }
  to { opacity: 1; }
}

@keyframes pulse {
  0%, 100% { opacity: 1; }
  50% { opacity: 0.4; }
}

/* === Neural Background === */
.neural-root {
  position: relative;
  min-height: 100vh;
}

.neural-bg {
  position: fixed;
  inset: 0;
  z-index: 0;
  pointer-events: none;
  background: var(--slate-950);
}

.neural-canvas {
  width: 100%;
  height: 100%;
  display: block;
}

.neural-vignette {
  position: absolute;
  inset: 0;
  background: radial-gradient(circle at 50% 50%, transparent 0%, var(--slate-950) 80%);
}

.site {
  position: relative;
  z-index: 10;
}

/* === Navigation === */
.nav-bar {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 100;
  padding: 2rem 0;
}

.nav-inner {
  max-width: 80rem;
  margin: 0 auto;
  padding: 0 1.5rem;
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.nav-brand {
  display: flex;
  align-items: center;
  gap: 1rem;
  font-size: 1.5rem;
  font-weight: 900;
  letter-spacing: -0.05em;
  color: var(--text-primary);
}

.brand-diamond {
  width: 1.25rem;
  height: 1.25rem;
  border: 2px solid var(--cyan);
  transform: rotate(45deg);
  transition: transform var(--transition-slow);
}

.brand-diamond.large {
  width: 2rem;
  height: 2rem;
}

.nav-brand:hover .brand-diamond {
  transform: rotate(225deg);
}

.nav-right {
  display: flex;
  align-items: center;
  gap: 2.5rem;
}

.nav-links {
  display: flex;
  gap: 2rem;
}

.nav-link {
  font-size: var(--text-xs);
  font-weight: 700;
  letter-spacing: 0.3em;
  text-transform: uppercase;
  color: var(--text-muted);
  transition: color var(--transition-fast);
}

.nav-link:hover {
  color: var(--text-primary);
}

.nav-funding {
  padding: 0.75rem 2rem;
  border: 1px solid rgba(255, 255, 255, 0.1);
  border-radius: 999px;
  background: rgba(255, 255, 255, 0.05);
  font-size: var(--text-xs);
  font-weight: 900;
  letter-spacing: 0.2em;
  text-transform: uppercase;
  color: var(--text-primary);
  transition: all var(--transition-base);
}

.nav-funding:hover {
  background: var(--cyan);
  color: var(--slate-950);
}

@media (max-width: 768px) {
  .nav-links { display: none; }
}

/* === Sections === */
.section {
  position: relative;
  max-width: 80rem;
  margin: 0 auto;
  padding: 8rem 1.5rem;
}

.section-flush { padding-top: 0; padding-bottom: 0; }
.section-compact { padding-top: 4rem; padding-bottom: 4rem; }

.section-band {
  max-width: none;
  background: rgba(15, 23, 42, 0.2);
  border-top: 1px solid var(--glass-border);
  border-bottom: 1px solid var(--glass-border);
}

.section-head {
  display: flex;
  flex-wrap: wrap;
  justify-content: space-between;
  align-items: flex-end;
  gap: 2rem;
  margin-bottom: 6rem;
}

.section-title {
  font-size: var(--text-2xl);
  font-weight: 900;
  letter-spacing: -0.05em;
  line-height: 1;
  font-style: italic;
  text-transform: uppercase;
  color: var(--text-primary);
}

.section-rule {
  width: 6rem;
  height: 0.5rem;
  margin-top: 2rem;
  background: var(--cyan);
}

.section-note {
  max-width: 20rem;
  font-family: var(--font-mono);
  font-size: var(--text-sm);
  line-height: 1.6;
  color: var(--text-muted);
}

/* === Hero === */
.hero {
  min-height: 100vh;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 0 1.5rem;
  text-align: center;
}

.hero-inner {
  max-width: 72rem;
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 2.5rem;
}

.hero-title {
  font-size: clamp(4rem, 12vw, 10rem);
  font-weight: 900;
  line-height: 0.8;
  letter-spacing: -0.06em;
  color: var(--text-primary);
}

.hero-title-fade {
  background: linear-gradient(180deg, #ffffff, rgba(255, 255, 255, 0.2));
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

.hero-tagline {
  max-width: 48rem;
  font-size: var(--text-lg);
  font-weight: 300;
  line-height: 1.7;
  color: var(--text-secondary);
}

.hero-tagline strong {
  color: var(--text-primary);
  font-weight: 500;
}

.hero-actions {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: 1.5rem;
  margin-top: 1.5rem;
}

/* === Buttons === */
.btn-primary,
.btn-secondary {
  display: inline-flex;
  align-items: center;
  gap: 0.75rem;
  padding: 1.5rem 3rem;
  font-size: 1.125rem;
  font-weight: 900;
  transition: all var(--transition-base);
}

.btn-primary {
  background: var(--text-primary);
  color: var(--slate-950);
}

.btn-primary:hover {
  background: var(--cyan);
}

.btn-secondary {
  border: 1px solid rgba(255, 255, 255, 0.1);
  background: rgba(255, 255, 255, 0.05);
  color: var(--text-primary);
  backdrop-filter: blur(24px);
}

.btn-secondary:hover {
  background: rgba(255, 255, 255, 0.1);
}

/* === Status Badge === */
.status-badge {
  display: inline-flex;
  align-items: center;
  gap: 0.75rem;
  padding: 0.5rem 1.25rem;
  border: 1px solid rgba(34, 211, 238, 0.2);
  border-radius: 999px;
  background: rgba(34, 211, 238, 0.05);
}

.status-dot {
  width: 0.5rem;
  height: 0.5rem;
  border-radius: 50%;
  background: var(--offline);
}

.status-dot.live {
  background: var(--cyan);
  animation: pulse 2s ease-in-out infinite;
}

.status-label {
  font-size: var(--text-xs);
  font-weight: 700;
  letter-spacing: 0.4em;
  text-transform: uppercase;
  color: var(--cyan);
}

/* === Stat Counters === */
.stats-grid {
  display: grid;
  grid-template-columns: repeat(4, 1fr);
  gap: 1px;
  border: 1px solid var(--glass-border);
  border-radius: 2rem;
  overflow: hidden;
  background: var(--glass-border);
}

.stat-box {
  display: flex;
  flex-direction: column;
  align-items: center;
  padding: 2.5rem 1.5rem;
  background: var(--glass);
  backdrop-filter: blur(12px);
}

.stat-value {
  font-size: 2.5rem;
  font-weight: 900;
  letter-spacing: -0.05em;
  color: var(--text-primary);
}

.stat-label {
  margin-top: 0.5rem;
  font-size: var(--text-xs);
  font-weight: 700;
  letter-spacing: 0.3em;
  text-transform: uppercase;
  color: var(--text-muted);
}

@media (max-width: 768px) {
  .stats-grid { grid-template-columns: repeat(2, 1fr); }
}

/* === Feature Cards === */
.feature-grid {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: 2rem;
}

.feature-card {
  position: relative;
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
  padding: 2.5rem;
  text-align: left;
  border: 1px solid var(--glass-border);
  border-radius: 2.5rem;
  background: var(--glass);
  backdrop-filter: blur(24px);
  transition: border-color var(--transition-base), transform var(--transition-base);
}

.feature-card:hover {
  border-color: rgba(34, 211, 238, 0.3);
  transform: translateY(-4px);
}

.feature-icon {
  width: 4rem;
  height: 4rem;
  display: flex;
  align-items: center;
  justify-content: center;
  border-radius: 1rem;
  background: var(--slate-950);
  border: 1px solid rgba(255, 255, 255, 0.1);
  color: var(--cyan);
  transition: transform var(--transition-base);
}

.feature-card:hover .feature-icon {
  transform: scale(1.1);
}

.feature-title {
  font-size: 1.5rem;
  font-weight: 700;
  color: var(--text-primary);
}

.feature-items {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.feature-items li {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  font-size: var(--text-sm);
  color: var(--text-secondary);
}

.feature-bullet {
  width: 0.375rem;
  height: 0.375rem;
  border-radius: 50%;
  background: rgba(34, 211, 238, 0.4);
}

.feature-more {
  font-size: var(--text-xs);
  font-weight: 700;
  letter-spacing: 0.3em;
  text-transform: uppercase;
  color: var(--cyan);
  opacity: 0;
  transition: opacity var(--transition-base);
}

.feature-card:hover .feature-more {
  opacity: 1;
}

@media (max-width: 1024px) {
  .feature-grid { grid-template-columns: 1fr; }
}

/* === Technical Orchestration === */
.logic-grid {
  max-width: 80rem;
  margin: 0 auto;
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 6rem;
  align-items: center;
}

.logic-title {
  margin-bottom: 3rem;
  font-size: 3rem;
  font-weight: 900;
  line-height: 1;
  letter-spacing: -0.05em;
  text-transform: uppercase;
  color: var(--text-primary);
}

.tech-list {
  display: flex;
  flex-direction: column;
  gap: 2.5rem;
}

.tech-item {
  display: flex;
  gap: 1.5rem;
}

.tech-icon {
  flex-shrink: 0;
  width: 3rem;
  height: 3rem;
  display: flex;
  align-items: center;
  justify-content: center;
  border: 1px solid rgba(255, 255, 255, 0.1);
  border-radius: 0.75rem;
  background: var(--slate-900);
  color: var(--cyan);
}

.tech-title {
  margin-bottom: 0.5rem;
  font-size: var(--text-lg);
  font-weight: 700;
  color: var(--text-primary);
}

.tech-desc {
  font-size: var(--text-sm);
  line-height: 1.6;
  color: var(--text-muted);
}

@media (max-width: 1024px) {
  .logic-grid { grid-template-columns: 1fr; gap: 3rem; }
}

/* === Terminal Panel === */
.terminal-panel {
  padding: 2.5rem;
  border: 1px solid rgba(34, 211, 238, 0.2);
  border-radius: 3rem;
  background: var(--slate-950);
  font-family: var(--font-mono);
  font-size: var(--text-sm);
  box-shadow: 0 0 50px rgba(34, 211, 238, 0.1);
}

.terminal-lights {
  display: flex;
  gap: 0.5rem;
  margin-bottom: 1rem;
}

.light {
  width: 0.75rem;
  height: 0.75rem;
  border-radius: 50%;
}

.light.red { background: rgba(239, 68, 68, 0.5); }
.light.green { background: rgba(34, 197, 94, 0.5); }

.terminal-title {
  margin-bottom: 2rem;
  font-size: var(--text-xs);
  letter-spacing: 0.2em;
  color: var(--text-muted);
}

.terminal-lines {
  display: flex;
  flex-direction: column;
  gap: 1rem;
  color: var(--text-secondary);
}

.terminal-strong { color: var(--text-primary); }
.terminal-accent { color: var(--cyan); }
.terminal-comment { color: var(--text-muted); font-style: italic; }

/* === Progress Bar === */
.progress {
  display: flex;
  align-items: center;
  gap: 1rem;
}

.progress-track {
  flex: 1;
  height: 0.375rem;
  border-radius: 999px;
  background: var(--slate-900);
  overflow: hidden;
}

.progress-fill {
  height: 100%;
  width: 0;
  border-radius: 999px;
  background: linear-gradient(90deg, var(--cyan-deep), var(--cyan));
  box-shadow: 0 0 12px var(--cyan-glow);
}

.progress-label {
  min-width: 4.5rem;
  text-align: right;
  font-family: var(--font-mono);
  font-size: var(--text-xs);
  font-weight: 700;
  color: var(--cyan);
}

.terminal-progress { margin-top: 1.5rem; }

/* === Bulletin Carousel === */
.bulletin-carousel {
  display: grid;
  grid-template-columns: auto 1fr auto;
  grid-template-rows: auto auto;
  align-items: center;
  gap: 1.5rem 2rem;
  padding: 3rem;
  border: 1px solid var(--glass-border);
  border-radius: 2.5rem;
  background: var(--glass);
  backdrop-filter: blur(24px);
}

.bulletin {
  animation: fade-in 0.6s ease;
}

.bulletin-tag {
  font-size: var(--text-xs);
  font-weight: 700;
  letter-spacing: 0.3em;
  text-transform: uppercase;
  color: var(--violet);
}

.bulletin-headline {
  margin: 0.75rem 0;
  font-size: 1.75rem;
  font-weight: 900;
  letter-spacing: -0.03em;
  color: var(--text-primary);
}

.bulletin-body {
  font-size: var(--text-sm);
  line-height: 1.7;
  color: var(--text-secondary);
}

.carousel-arrow {
  width: 3rem;
  height: 3rem;
  display: flex;
  align-items: center;
  justify-content: center;
  border: 1px solid rgba(255, 255, 255, 0.1);
  border-radius: 50%;
  color: var(--text-secondary);
  transition: all var(--transition-fast);
}

.carousel-arrow:hover {
  border-color: var(--cyan);
  color: var(--cyan);
}

.carousel-dots {
  grid-column: 1 / -1;
  display: flex;
  justify-content: center;
  gap: 0.75rem;
}

.carousel-dot {
  width: 0.5rem;
  height: 0.5rem;
  border-radius: 999px;
  background: var(--slate-800);
  transition: all var(--transition-base);
}

.carousel-dot.active {
  width: 2rem;
  background: var(--cyan);
}

/* === Donations Page === */
.donations {
  min-height: 100vh;
  padding: 10rem 1.5rem 5rem;
}

.donations-inner {
  max-width: 72rem;
  margin: 0 auto;
}

.back-link {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  margin-bottom: 3rem;
  font-size: var(--text-xs);
  font-weight: 700;
  letter-spacing: 0.3em;
  text-transform: uppercase;
  color: var(--text-muted);
  transition: color var(--transition-fast);
}

.back-link:hover { color: var(--cyan); }

.donations-grid {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 5rem;
  align-items: center;
}

.donations-title {
  margin-bottom: 2rem;
  font-size: var(--text-3xl);
  font-weight: 900;
  line-height: 0.9;
  letter-spacing: -0.05em;
  color: var(--text-primary);
}

.donations-text {
  margin-bottom: 2.5rem;
  font-size: var(--text-lg);
  line-height: 1.7;
  color: var(--text-secondary);
}

.funding-lines {
  display: flex;
  flex-direction: column;
  gap: 1rem;
  margin-bottom: 3rem;
}

.funding-line {
  display: flex;
  align-items: center;
  gap: 1rem;
  font-size: var(--text-xs);
  font-weight: 700;
  letter-spacing: 0.2em;
  text-transform: uppercase;
  color: var(--text-secondary);
}

.funding-line svg { color: var(--cyan); }

.donation-progress {
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.donation-figures {
  display: flex;
  justify-content: space-between;
  align-items: baseline;
  gap: 1rem;
}

.donation-status {
  font-size: var(--text-xs);
  font-weight: 700;
  letter-spacing: 0.3em;
  text-transform: uppercase;
  color: var(--text-muted);
}

.donation-summary {
  font-family: var(--font-mono);
  font-size: var(--text-sm);
  color: var(--text-primary);
}

.qr-card-wrap {
  position: relative;
}

.qr-card-glow {
  position: absolute;
  inset: -0.25rem;
  border-radius: 4rem;
  background: linear-gradient(90deg, var(--cyan), var(--violet));
  filter: blur(24px);
  opacity: 0.2;
}

.qr-card {
  position: relative;
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 2rem;
  padding: 3rem;
  border-radius: 4rem;
  background: var(--text-primary);
}

.donation-qr {
  width: 100%;
  max-width: 250px;
  aspect-ratio: 1;
}

.donation-qr svg {
  width: 100%;
  height: 100%;
  display: block;
}

.qr-error {
  padding: 2rem;
  font-family: var(--font-mono);
  font-size: var(--text-sm);
  color: var(--offline);
}

.qr-caption {
  font-size: var(--text-xs);
  font-weight: 900;
  letter-spacing: 0.4em;
  text-transform: uppercase;
  color: var(--slate-950);
}

@media (max-width: 1024px) {
  .donations-grid { grid-template-columns: 1fr; }
}

/* === Modals === */
.modal-root {
  position: fixed;
  inset: 0;
  z-index: 200;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 1.5rem;
  animation: fade-in 0.2s ease;
}

.modal-backdrop {
  position: absolute;
  inset: 0;
  background: rgba(2, 6, 23, 0.9);
  backdrop-filter: blur(24px);
}

.modal-panel {
  position: relative;
  width: 100%;
  max-width: 42rem;
  max-height: 85vh;
  overflow-y: auto;
  padding: 3rem;
  border: 1px solid rgba(255, 255, 255, 0.1);
  border-radius: 3rem;
  background: var(--slate-900);
  box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5);
}

.modal-panel:focus {
  outline: none;
}

.modal-close {
  position: absolute;
  top: 2rem;
  right: 2rem;
  padding: 0.75rem;
  border-radius: 50%;
  background: rgba(255, 255, 255, 0.05);
  color: var(--text-secondary);
  transition: background var(--transition-fast);
}

.modal-close:hover {
  background: rgba(255, 255, 255, 0.1);
  color: var(--text-primary);
}

/* === Documentation Modal === */
.docs-modal {
  max-width: 64rem;
  padding: 0;
  display: flex;
  overflow: hidden;
}

.docs-sidebar {
  width: 16rem;
  flex-shrink: 0;
  padding: 2.5rem;
  border-right: 1px solid var(--glass-border);
  background: rgba(2, 6, 23, 0.5);
}

.docs-brand {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  margin-bottom: 3rem;
  font-size: var(--text-lg);
  font-weight: 900;
  color: var(--cyan);
}

.docs-tabs {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

.docs-tab {
  padding: 1rem 1.5rem;
  border-radius: 1rem;
  text-align: left;
  font-size: var(--text-xs);
  font-weight: 700;
  letter-spacing: 0.2em;
  text-transform: uppercase;
  color: var(--text-muted);
  transition: all var(--transition-fast);
}

.docs-tab:hover { color: var(--text-secondary); }

.docs-tab.active {
  background: var(--cyan);
  color: var(--slate-950);
}

.docs-content {
  flex: 1;
  padding: 4rem;
  overflow-y: auto;
}

.docs-page {
  display: flex;
  flex-direction: column;
  gap: 2rem;
  animation: fade-in 0.3s ease;
}

.docs-heading {
  font-size: 2.25rem;
  font-weight: 900;
  letter-spacing: -0.03em;
  font-style: italic;
  color: var(--text-primary);
}

.docs-text {
  font-size: var(--text-lg);
  font-weight: 300;
  line-height: 1.7;
  color: var(--text-secondary);
}

.docs-metrics {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 1.5rem;
}

.docs-metric {
  padding: 1.5rem;
  border: 1px solid var(--glass-border);
  border-radius: 1rem;
  background: rgba(255, 255, 255, 0.05);
}

.docs-metric-label {
  margin-bottom: 0.5rem;
  font-size: var(--text-xs);
  font-weight: 700;
  letter-spacing: 0.2em;
  text-transform: uppercase;
}

.docs-metric-value {
  font-size: 1.5rem;
  font-weight: 700;
  color: var(--text-primary);
}

.code-block {
  padding: 2rem;
  border: 1px solid var(--glass-border);
  border-radius: 1rem;
  background: #000000;
  font-family: var(--font-mono);
  font-size: var(--text-sm);
  line-height: 1.8;
  color: var(--text-secondary);
  overflow-x: auto;
}

.code-indent { padding-left: 1.5rem; }
.code-comment { color: var(--text-muted); }

.protocol-list {
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.protocol-item {
  display: flex;
  align-items: center;
  gap: 1rem;
  padding: 1.25rem;
  border: 1px solid var(--glass-border);
  border-radius: 1rem;
  background: rgba(255, 255, 255, 0.05);
  color: var(--text-primary);
}

.protocol-item svg { color: var(--cyan); }

@media (max-width: 768px) {
  .docs-modal { flex-direction: column; }
  .docs-sidebar { width: 100%; border-right: none; }
  .docs-content { padding: 2rem; }
}

/* === Status Modal === */
.status-modal { max-width: 48rem; }

.status-dashboard {
  display: flex;
  flex-direction: column;
  gap: 2rem;
}

.status-header {
  display: flex;
  align-items: center;
  gap: 1rem;
  flex-wrap: wrap;
}

.status-grid {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 1rem;
}

.region-list {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.region-row {
  display: grid;
  grid-template-columns: auto 5rem 6rem 1fr;
  align-items: center;
  gap: 1rem;
}

.region-node {
  font-family: var(--font-mono);
  font-size: var(--text-sm);
  color: var(--text-primary);
}

.region-city {
  font-size: var(--text-xs);
  letter-spacing: 0.2em;
  text-transform: uppercase;
  color: var(--text-muted);
}

.status-log {
  max-height: 12rem;
  overflow-y: auto;
}

/* === Research Modal === */
.research-modal { max-width: 48rem; }

.research-header {
  display: flex;
  align-items: center;
  gap: 1.5rem;
  margin-bottom: 2rem;
  color: var(--cyan);
}

.research-title {
  font-size: 2.25rem;
  font-weight: 900;
  letter-spacing: -0.03em;
  color: var(--text-primary);
}

.research-detail {
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
}

.research-subheading {
  font-size: var(--text-xs);
  font-weight: 700;
  letter-spacing: 0.3em;
  text-transform: uppercase;
  color: var(--violet);
}

.milestones {
  display: flex;
  flex-direction: column;
  gap: 1.25rem;
}

.milestone {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

.milestone-title {
  font-size: var(--text-sm);
  color: var(--text-secondary);
}

/* === Footer === */
.site-footer {
  padding: 8rem 1.5rem;
  border-top: 1px solid var(--glass-border);
  background: var(--slate-950);
}

.footer-inner {
  max-width: 80rem;
  margin: 0 auto;
  display: flex;
  flex-wrap: wrap;
  justify-content: space-between;
  gap: 4rem;
}

.footer-brand {
  display: flex;
  align-items: center;
  gap: 1rem;
  margin-bottom: 2rem;
  font-size: 2.25rem;
  font-weight: 900;
  letter-spacing: -0.05em;
  color: var(--text-primary);
}

.footer-blurb {
  max-width: 24rem;
  font-size: var(--text-lg);
  line-height: 1.7;
  font-style: italic;
  color: var(--text-muted);
}

.footer-links {
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
}

.footer-link {
  text-align: left;
  font-size: var(--text-xs);
  font-weight: 700;
  letter-spacing: 0.3em;
  text-transform: uppercase;
  color: var(--text-secondary);
  transition: color var(--transition-fast);
}

.footer-link:hover { color: var(--cyan); }
.footer-link.funding { color: var(--cyan); }

.footer-legal {
  max-width: 80rem;
  margin: 5rem auto 0;
  font-size: var(--text-xs);
  letter-spacing: 0.5em;
  text-transform: uppercase;
  color: var(--slate-800);
}
"#;
