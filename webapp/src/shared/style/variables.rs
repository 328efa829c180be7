pub const CSS_VARIABLES: &str = r#"
:root {
  /* Color System */
  --primary: #3B82F6;
  --primary-light: #60A5FA;
  --primary-dark: #2563EB;
  --secondary: #8B5CF6;
  --accent: #EC4899;
  --success: #10B981;
  --error: #EF4444;

  /* Neutrals */
  --neutral-50: #F9FAFB;
  --neutral-100: #F3F4F6;
  --neutral-200: #E5E7EB;
  --neutral-300: #D1D5DB;
  --neutral-400: #9CA3AF;
  --neutral-500: #6B7280;
  --neutral-600: #4B5563;
  --neutral-700: #374151;
  --neutral-800: #1F2937;
  --neutral-900: #111827;

  /* Background and Surface Colors */
  --background: var(--neutral-50);
  --surface: #FFFFFF;
  --surface-glass: rgba(255, 255, 255, 0.6);
  --glass-border: rgba(255, 255, 255, 0.4);

  /* Text Colors */
  --text-primary: var(--neutral-900);
  --text-secondary: var(--neutral-600);
  --text-tertiary: var(--neutral-500);
  --text-inverse: #FFFFFF;

  --border: var(--neutral-200);
  --gradient-hero: linear-gradient(135deg, #3B82F6 0%, #8B5CF6 50%, #EC4899 100%);

  /* Layout */
  --header-height: 64px;
  --container-width: 1200px;

  /* Spacing System */
  --space-1: 4px;
  --space-2: 8px;
  --space-3: 12px;
  --space-4: 16px;
  --space-6: 24px;
  --space-8: 32px;
  --space-12: 48px;
  --space-16: 64px;

  /* Border Radius */
  --radius-sm: 4px;
  --radius-md: 8px;
  --radius-lg: 12px;
  --radius-xl: 20px;
  --radius-full: 9999px;

  /* Shadows */
  --shadow-sm: 0 1px 2px 0 rgba(0, 0, 0, 0.05);
  --shadow-md: 0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -1px rgba(0, 0, 0, 0.06);
  --shadow-lg: 0 10px 25px -5px rgba(0, 0, 0, 0.15);

  /* Animation */
  --transition-fast: 150ms;
  --transition-normal: 250ms;
  --easing-standard: cubic-bezier(0.4, 0.0, 0.2, 1);
}

[data-theme="dark"] {
  --background: #0B1120;
  --surface: var(--neutral-800);
  --surface-glass: rgba(31, 41, 55, 0.6);
  --glass-border: rgba(255, 255, 255, 0.08);

  --text-primary: var(--neutral-50);
  --text-secondary: var(--neutral-300);
  --text-tertiary: var(--neutral-400);

  --border: var(--neutral-700);
  --shadow-lg: 0 10px 25px -5px rgba(0, 0, 0, 0.6);
}
"#;
