pub const BASE_COMPONENTS: &str = r#"
/* Buttons */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: var(--space-2);
  padding: var(--space-2) var(--space-4);
  border-radius: var(--radius-md);
  font-weight: 500;
  font-size: 0.95rem;
  cursor: pointer;
  border: 1px solid transparent;
  transition: all var(--transition-fast) var(--easing-standard);
}

.btn:hover { text-decoration: none; transform: translateY(-1px); }
.btn:disabled { opacity: 0.6; cursor: not-allowed; transform: none; }
.btn-lg { padding: var(--space-3) var(--space-6); font-size: 1.05rem; }
.btn-primary { background: var(--gradient-hero); color: var(--text-inverse); }
.btn-secondary { background-color: var(--surface); color: var(--text-primary); border-color: var(--border); }
.btn-ghost { background: none; color: var(--text-secondary); }
.btn-ghost:hover { color: var(--primary); }

.icon-btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 40px;
  height: 40px;
  border-radius: var(--radius-full);
  border: 1px solid var(--border);
  background-color: var(--surface);
  color: var(--text-primary);
  cursor: pointer;
}

.icon { width: 20px; height: 20px; flex-shrink: 0; }

/* Navigation */
.app-header {
  position: sticky;
  top: 0;
  z-index: 40;
  background-color: var(--surface-glass);
  backdrop-filter: blur(12px);
  border-bottom: 1px solid var(--glass-border);
}

.nav-container {
  display: flex;
  height: var(--header-height);
  align-items: center;
  justify-content: space-between;
  max-width: var(--container-width);
  margin: 0 auto;
  padding: 0 var(--space-4);
}

.logo { font-weight: 700; font-size: 1.25rem; color: var(--text-primary); }
.logo span { background: var(--gradient-hero); -webkit-background-clip: text; background-clip: text; color: transparent; }

.nav-links { display: flex; gap: var(--space-2); align-items: center; }

.nav-link {
  color: var(--text-secondary);
  font-weight: 500;
  padding: var(--space-2) var(--space-3);
  border-radius: var(--radius-md);
}

.nav-link:hover { color: var(--primary); text-decoration: none; }
.nav-link.active { color: var(--primary); background-color: rgba(59, 130, 246, 0.1); }

.nav-actions { display: flex; gap: var(--space-2); align-items: center; }
.menu-toggle { display: none; }

.mobile-menu {
  display: none;
  flex-direction: column;
  padding: var(--space-2) var(--space-4) var(--space-4);
  border-top: 1px solid var(--border);
}

@media (max-width: 768px) {
  .nav-links { display: none; }
  .menu-toggle { display: inline-flex; }
  .mobile-menu.open { display: flex; }
}

.scroll-progress {
  position: fixed;
  top: 0;
  left: 0;
  height: 3px;
  z-index: 50;
  background: var(--gradient-hero);
  transform-origin: 0 50%;
}

.scroll-top {
  position: fixed;
  right: var(--space-6);
  bottom: var(--space-6);
  z-index: 40;
  width: 3rem;
  height: 3rem;
  border: none;
  border-radius: 9999px;
  color: #fff;
  background: var(--gradient-hero);
  box-shadow: var(--shadow-lg);
  cursor: pointer;
  display: inline-flex;
  align-items: center;
  justify-content: center;
  animation: fade-in-up 0.3s ease-out;
}

.scroll-top:hover {
  transform: scale(1.1);
}

/* Footer */
.app-footer {
  margin-top: var(--space-16);
  padding: var(--space-12) var(--space-4) var(--space-8);
  background-color: var(--surface);
  border-top: 1px solid var(--border);
}

.footer-grid {
  display: grid;
  grid-template-columns: 2fr 1fr 1fr;
  gap: var(--space-8);
  max-width: var(--container-width);
  margin: 0 auto;
}

.footer-grid h4 { margin-bottom: var(--space-3); }
.footer-grid ul { list-style: none; display: grid; gap: var(--space-2); }
.footer-bottom { text-align: center; color: var(--text-tertiary); margin-top: var(--space-8); font-size: 0.9rem; }

@media (max-width: 768px) {
  .footer-grid { grid-template-columns: 1fr; }
}

/* Cards */
.card {
  background-color: var(--surface);
  border: 1px solid var(--border);
  border-radius: var(--radius-lg);
  overflow: hidden;
  box-shadow: var(--shadow-sm);
  transition: box-shadow var(--transition-normal), transform var(--transition-normal);
}

.card:hover { box-shadow: var(--shadow-lg); transform: translateY(-4px); }
.card-body { padding: var(--space-6); display: grid; gap: var(--space-3); }
.card-title { font-size: 1.2rem; font-weight: 600; }
.card-text { color: var(--text-secondary); }
.card-meta { display: flex; gap: var(--space-4); color: var(--text-tertiary); font-size: 0.85rem; }
.card-links { display: flex; gap: var(--space-2); }

.glass-card {
  background-color: var(--surface-glass);
  backdrop-filter: blur(16px);
  border: 1px solid var(--glass-border);
  border-radius: var(--radius-xl);
  padding: var(--space-6);
  box-shadow: var(--shadow-lg);
}

.card-3d {
  transition: transform var(--transition-normal) var(--easing-standard);
  transform-style: preserve-3d;
  will-change: transform;
}

/* Tags and chips */
.tag {
  display: inline-flex;
  align-items: center;
  padding: 2px var(--space-2);
  border-radius: var(--radius-full);
  font-size: 0.75rem;
  font-weight: 500;
  background-color: rgba(59, 130, 246, 0.1);
  color: var(--primary-dark);
}

.tag-purple { background-color: rgba(139, 92, 246, 0.12); color: var(--secondary); }
.tag-pink { background-color: rgba(236, 72, 153, 0.12); color: var(--accent); }
.tag-green { background-color: rgba(16, 185, 129, 0.12); color: var(--success); }
.tag-muted { background-color: var(--neutral-200); color: var(--neutral-700); }
.tag-list { display: flex; flex-wrap: wrap; gap: var(--space-2); }

.chip-row { display: flex; flex-wrap: wrap; gap: var(--space-2); }

.chip {
  padding: var(--space-2) var(--space-4);
  border-radius: var(--radius-full);
  border: 1px solid var(--border);
  background-color: var(--surface);
  color: var(--text-secondary);
  cursor: pointer;
  font-weight: 500;
}

.chip.active { background: var(--gradient-hero); color: var(--text-inverse); border-color: transparent; }

/* Search */
.search-bar {
  display: grid;
  gap: var(--space-4);
  margin-bottom: var(--space-8);
  background-color: var(--surface);
  padding: var(--space-4);
  border-radius: var(--radius-lg);
  box-shadow: var(--shadow-sm);
}

.form-input {
  width: 100%;
  padding: var(--space-3) var(--space-4);
  border-radius: var(--radius-md);
  border: 1px solid var(--border);
  background-color: var(--background);
  color: var(--text-primary);
  font: inherit;
}

.form-input:focus { outline: 2px solid var(--primary); outline-offset: 1px; }
.form-input.invalid { border-color: var(--error); }
.field-error { color: var(--error); font-size: 0.85rem; }
.search-status { color: var(--text-tertiary); font-size: 0.9rem; }

/* Modal */
.modal-overlay {
  position: fixed;
  inset: 0;
  z-index: 60;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: var(--space-4);
  background-color: rgba(0, 0, 0, 0.6);
  backdrop-filter: blur(4px);
}

.modal-content {
  width: 100%;
  max-height: 90vh;
  overflow-y: auto;
  background-color: var(--surface);
  border-radius: var(--radius-xl);
  box-shadow: var(--shadow-lg);
  animation: fade-in-up var(--transition-normal) var(--easing-standard);
}

.modal-header { display: flex; justify-content: space-between; align-items: center; padding: var(--space-4) var(--space-6); border-bottom: 1px solid var(--border); }
.modal-title { font-size: 1.3rem; }
.modal-body { padding: var(--space-6); display: grid; gap: var(--space-4); }
.btn-close { background: none; border: none; font-size: 1.5rem; color: var(--text-secondary); cursor: pointer; }

/* Images */
.image-frame { position: relative; overflow: hidden; background-color: var(--neutral-200); }
.image-frame img { width: 100%; height: 100%; object-fit: cover; display: block; transition: opacity var(--transition-normal); }
.image-frame img.loading { opacity: 0; }

.image-placeholder {
  display: flex;
  align-items: center;
  justify-content: center;
  width: 100%;
  height: 100%;
  min-height: 120px;
  color: var(--text-tertiary);
  background: linear-gradient(135deg, var(--neutral-200), var(--neutral-300));
}

/* Backgrounds */
.backdrop { position: absolute; inset: 0; overflow: hidden; pointer-events: none; z-index: 0; }

.gradient-backdrop {
  background: linear-gradient(-45deg, rgba(59, 130, 246, 0.15), rgba(139, 92, 246, 0.15), rgba(236, 72, 153, 0.15), rgba(16, 185, 129, 0.1));
  background-size: 400% 400%;
  animation: gradient-shift 15s ease infinite;
}

.geo-shape {
  position: absolute;
  opacity: 0.12;
  border: 2px solid var(--primary);
  animation: float 12s ease-in-out infinite;
}

.geo-circle { border-radius: var(--radius-full); }
.geo-square { border-radius: var(--radius-sm); }
.geo-triangle { width: 0 !important; height: 0 !important; border: none; border-left: 30px solid transparent; border-right: 30px solid transparent; border-bottom: 52px solid var(--secondary); }

.particles { position: absolute; inset: 0; overflow: hidden; z-index: 0; }
.particles svg { width: 100%; height: 100%; display: block; }
.particles-content { position: relative; z-index: 1; }

.petals { position: fixed; inset: 0; overflow: hidden; pointer-events: none; z-index: 5; }

.petal {
  position: absolute;
  top: -20px;
  animation-name: petal-fall;
  animation-timing-function: ease-out;
  animation-fill-mode: both;
  filter: drop-shadow(0 1px 2px rgba(0, 0, 0, 0.1));
}

.petal-pink { color: #FBCFE8; }
.petal-white { color: #FFFFFF; }

.petal-toggle { position: fixed; bottom: var(--space-4); right: var(--space-4); z-index: 45; }

/* Carousel */
.carousel { position: relative; max-width: 900px; margin: 0 auto; }
.carousel-slide.forward { animation: slide-forward 500ms var(--easing-standard); }
.carousel-slide.backward { animation: slide-backward 500ms var(--easing-standard); }
.carousel-controls { display: flex; justify-content: center; align-items: center; gap: var(--space-4); margin-top: var(--space-6); }
.carousel-dots { display: flex; gap: var(--space-2); }
.carousel-dot { width: 10px; height: 10px; border-radius: var(--radius-full); border: none; background-color: var(--neutral-300); cursor: pointer; }
.carousel-dot.active { background-color: var(--primary); width: 28px; }

.testimonial { display: grid; gap: var(--space-4); text-align: center; }
.testimonial-quote { font-size: 1.15rem; font-style: italic; color: var(--text-secondary); }
.testimonial-author { display: flex; align-items: center; justify-content: center; gap: var(--space-3); }
.avatar { width: 56px; height: 56px; border-radius: var(--radius-full); overflow: hidden; flex-shrink: 0; }
.avatar-initials { display: flex; align-items: center; justify-content: center; background: var(--gradient-hero); color: var(--text-inverse); font-weight: 600; }
.stars { color: #F59E0B; letter-spacing: 2px; }

/* Timeline */
.timeline { position: relative; display: grid; gap: var(--space-6); padding-left: var(--space-8); }
.timeline::before { content: ""; position: absolute; left: 11px; top: 0; bottom: 0; width: 2px; background: var(--gradient-hero); }
.timeline-item { position: relative; cursor: pointer; }
.timeline-dot { position: absolute; left: calc(-1 * var(--space-8)); top: var(--space-6); width: 24px; height: 24px; border-radius: var(--radius-full); background-color: var(--surface); border: 3px solid var(--primary); }
.timeline-item.active .timeline-dot { background-color: var(--primary); }
.timeline-year { font-weight: 700; color: var(--primary); }
.timeline-highlights { padding-left: var(--space-6); color: var(--text-secondary); }

/* Skills */
.skill-bar { display: grid; gap: var(--space-1); }
.skill-label { display: flex; justify-content: space-between; font-size: 0.9rem; }
.skill-track { height: 8px; border-radius: var(--radius-full); background-color: var(--neutral-200); overflow: hidden; }
.skill-fill { height: 100%; border-radius: var(--radius-full); background: var(--gradient-hero); animation: skill-fill 1.2s var(--easing-standard); }
"#;
