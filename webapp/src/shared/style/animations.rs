pub const ANIMATIONS: &str = r#"
@keyframes fade-in-up {
  from { opacity: 0; transform: translateY(16px); }
  to { opacity: 1; transform: translateY(0); }
}

@keyframes gradient-shift {
  0% { background-position: 0% 50%; }
  50% { background-position: 100% 50%; }
  100% { background-position: 0% 50%; }
}

@keyframes float {
  0%, 100% { transform: translateY(0) rotate(0deg); }
  50% { transform: translateY(-20px) rotate(180deg); }
}

@keyframes petal-fall {
  0% { transform: translate(0, -20px) rotate(var(--rotation)) scale(0); }
  20% { transform: translate(var(--sway-1), 20vh) rotate(calc(var(--rotation) + 90deg)) scale(1); }
  40% { transform: translate(var(--sway-2), 40vh) rotate(calc(var(--rotation) + 180deg)) scale(1); }
  70% { transform: translate(var(--sway-3), 70vh) rotate(calc(var(--rotation) + 360deg)) scale(1); }
  100% { transform: translate(var(--sway-4), calc(100vh + 100px)) rotate(calc(var(--rotation) + 540deg)) scale(0.6); }
}

@keyframes slide-forward {
  from { opacity: 0; transform: translateX(60px) scale(0.95); }
  to { opacity: 1; transform: translateX(0) scale(1); }
}

@keyframes slide-backward {
  from { opacity: 0; transform: translateX(-60px) scale(0.95); }
  to { opacity: 1; transform: translateX(0) scale(1); }
}

@keyframes skill-fill {
  from { width: 0; }
}

@media (prefers-reduced-motion: reduce) {
  *, *::before, *::after {
    animation-duration: 0.01ms !important;
    animation-iteration-count: 1 !important;
    transition-duration: 0.01ms !important;
  }
}
"#;
