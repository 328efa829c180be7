pub const PAGE_STYLES: &str = r#"
.container { max-width: var(--container-width); margin: 0 auto; padding: 0 var(--space-4); }
.page { padding: var(--space-12) 0; animation: fade-in-up 400ms var(--easing-standard); }
.page-header { text-align: center; margin-bottom: var(--space-12); display: grid; gap: var(--space-3); }
.page-title { font-size: clamp(2rem, 5vw, 3rem); font-weight: 800; }
.page-subtitle { color: var(--text-secondary); font-size: 1.1rem; max-width: 640px; margin: 0 auto; }
.gradient-text { background: var(--gradient-hero); -webkit-background-clip: text; background-clip: text; color: transparent; }

.section { padding: var(--space-16) 0; position: relative; }
.section-header { display: flex; justify-content: space-between; align-items: end; margin-bottom: var(--space-8); gap: var(--space-4); }
.section-title { font-size: 1.8rem; font-weight: 700; }
.grid { display: grid; gap: var(--space-6); grid-template-columns: repeat(auto-fill, minmax(300px, 1fr)); }
.grid-2 { display: grid; gap: var(--space-8); grid-template-columns: repeat(2, minmax(0, 1fr)); }

@media (max-width: 768px) {
  .grid-2 { grid-template-columns: 1fr; }
}

.empty-state { text-align: center; padding: var(--space-12); display: grid; gap: var(--space-4); justify-items: center; color: var(--text-secondary); }

/* Home */
.hero { position: relative; min-height: calc(100vh - var(--header-height)); display: flex; align-items: center; overflow: hidden; }
.hero-content { position: relative; z-index: 1; display: grid; gap: var(--space-6); text-align: center; justify-items: center; padding: var(--space-16) var(--space-4); }
.hero-title { font-size: clamp(2.5rem, 7vw, 4.5rem); font-weight: 800; line-height: 1.1; }
.hero-subtitle { font-size: 1.25rem; color: var(--text-secondary); max-width: 640px; }
.hero-actions { display: flex; flex-wrap: wrap; gap: var(--space-4); justify-content: center; }
.hero-social { display: flex; gap: var(--space-3); }
.availability { display: inline-flex; align-items: center; gap: var(--space-2); color: var(--success); font-weight: 500; }
.availability::before { content: ""; width: 8px; height: 8px; border-radius: var(--radius-full); background-color: var(--success); }

.cta { text-align: center; display: grid; gap: var(--space-4); justify-items: center; }

/* About */
.about-intro { display: grid; grid-template-columns: 1fr 2fr; gap: var(--space-12); align-items: center; }
.about-photo { border-radius: var(--radius-xl); overflow: hidden; aspect-ratio: 1; }
.bio { display: grid; gap: var(--space-4); color: var(--text-secondary); font-size: 1.05rem; }
.stats-grid { display: grid; grid-template-columns: repeat(4, 1fr); gap: var(--space-4); }
.stat-card { text-align: center; display: grid; gap: var(--space-2); justify-items: center; }
.stat-value { font-size: 2rem; font-weight: 800; }
.stat-label { color: var(--text-tertiary); font-size: 0.9rem; }
.skill-group { display: grid; gap: var(--space-4); }
.fun-facts { display: grid; gap: var(--space-3); list-style: none; }
.fun-facts li::before { content: "✦ "; color: var(--accent); }

@media (max-width: 768px) {
  .about-intro { grid-template-columns: 1fr; }
  .stats-grid { grid-template-columns: repeat(2, 1fr); }
}

/* Projects */
.project-image { aspect-ratio: 16 / 9; }
.project-badges { display: flex; gap: var(--space-2); align-items: center; }
.project-detail-image { border-radius: var(--radius-lg); overflow: hidden; aspect-ratio: 16 / 9; }

/* Blog */
.post-image { aspect-ratio: 16 / 9; }
.post-layout { display: grid; grid-template-columns: minmax(0, 3fr) minmax(220px, 1fr); gap: var(--space-12); align-items: start; }
.post-header { display: grid; gap: var(--space-4); margin-bottom: var(--space-8); }
.post-hero { border-radius: var(--radius-xl); overflow: hidden; aspect-ratio: 21 / 9; margin-bottom: var(--space-8); }
.post-aside { position: sticky; top: calc(var(--header-height) + var(--space-6)); display: grid; gap: var(--space-6); }
.toc { list-style: none; display: grid; gap: var(--space-2); }
.toc a { color: var(--text-secondary); }
.share-row { display: flex; flex-wrap: wrap; gap: var(--space-2); }
.back-link { display: inline-flex; align-items: center; gap: var(--space-2); margin-bottom: var(--space-6); }

@media (max-width: 960px) {
  .post-layout { grid-template-columns: 1fr; }
  .post-aside { position: static; }
}

.prose { color: var(--text-secondary); font-size: 1.05rem; line-height: 1.8; }
.prose h2 { color: var(--text-primary); font-size: 1.6rem; margin: var(--space-12) 0 var(--space-4); scroll-margin-top: calc(var(--header-height) + var(--space-4)); }
.prose h3 { color: var(--text-primary); font-size: 1.25rem; margin: var(--space-8) 0 var(--space-3); }
.prose p, .prose ul, .prose ol { margin-bottom: var(--space-4); }
.prose ul, .prose ol { padding-left: var(--space-6); }
.prose pre { background-color: var(--neutral-900); color: var(--neutral-100); padding: var(--space-4); border-radius: var(--radius-md); overflow-x: auto; margin-bottom: var(--space-4); font-size: 0.9rem; }
.prose code { font-family: ui-monospace, SFMono-Regular, Menlo, monospace; }
.prose :not(pre) > code { background-color: var(--neutral-200); color: var(--neutral-800); padding: 1px 6px; border-radius: var(--radius-sm); }
.prose table { border-collapse: collapse; width: 100%; margin-bottom: var(--space-4); }
.prose th, .prose td { border: 1px solid var(--border); padding: var(--space-2) var(--space-3); text-align: left; }
.prose blockquote { border-left: 4px solid var(--primary); padding-left: var(--space-4); font-style: italic; }

/* Contact */
.contact-layout { display: grid; grid-template-columns: 3fr 2fr; gap: var(--space-8); }
.contact-form { display: grid; gap: var(--space-4); }
.form-row { display: grid; grid-template-columns: 1fr 1fr; gap: var(--space-4); }
.form-field { display: grid; gap: var(--space-1); }
.form-field label { font-weight: 500; font-size: 0.9rem; }
.form-status { padding: var(--space-3) var(--space-4); border-radius: var(--radius-md); }
.form-status.sent { background-color: rgba(16, 185, 129, 0.12); color: var(--success); }
.form-status.failed { background-color: rgba(239, 68, 68, 0.12); color: var(--error); }
.contact-detail { display: flex; gap: var(--space-3); align-items: center; }
.contact-detail .icon { color: var(--primary); }

@media (max-width: 768px) {
  .contact-layout, .form-row { grid-template-columns: 1fr; }
}

/* Errors */
.error-page { min-height: 70vh; display: flex; align-items: center; justify-content: center; text-align: center; }
.error-code { font-size: clamp(5rem, 18vw, 9rem); font-weight: 900; line-height: 1; }
.error-links { display: flex; flex-wrap: wrap; gap: var(--space-3); justify-content: center; }
"#;
