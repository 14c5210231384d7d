pub const NAVBAR_COMPONENTS: &str = r#"
/* Navigation bar */
.navbar {
  position: fixed;
  top: 0;
  left: 0;
  width: 100%;
  padding: 14px var(--space-12);
  z-index: 1000;
  transition: background-color var(--transition-normal) var(--easing-standard),
              color var(--transition-normal) var(--easing-standard);
}

.navbar.theme-light {
  background-color: var(--white);
  color: var(--black);
}

.navbar.theme-dark {
  background-color: var(--black);
  color: var(--white);
}

.navbar-container {
  max-width: var(--container-width);
  margin: 0 auto;
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 0 var(--space-4);
}

.navbar-actions {
  display: flex;
  align-items: center;
  gap: var(--space-4);
}

/* Brand */
.brand {
  position: relative;
  font-size: 1.5rem;
  font-weight: 700;
  cursor: pointer;
  color: inherit;
}

.brand-name {
  display: inline-block;
  transition: transform var(--transition-normal) var(--easing-standard);
}

.brand:hover .brand-name {
  transform: scale(1.1);
}

.brand-underline {
  position: absolute;
  bottom: 0;
  left: 0;
  width: 100%;
  height: 2px;
  transform: scaleX(0);
  transition: transform var(--transition-normal) var(--easing-standard);
}

.brand:hover .brand-underline {
  transform: scaleX(1);
}

/* Search */
.search-bar {
  position: relative;
  display: flex;
  align-items: center;
  overflow: hidden;
}

.search-input {
  padding: var(--space-2) var(--space-4) var(--space-2) var(--space-10);
  border-radius: var(--radius-lg);
  border: 1px solid var(--neutral-700);
  outline: none;
  transition: opacity var(--transition-normal) var(--easing-standard),
              background-color var(--transition-fast) var(--easing-standard);
}

.search-input:focus {
  border-color: var(--primary);
}

.search-input.idle {
  opacity: 1;
  cursor: pointer;
}

.search-input.focused {
  opacity: 0.75;
  cursor: text;
}

.theme-light .search-input {
  background-color: var(--white);
  color: var(--black);
}

.theme-light .search-input:hover {
  background-color: var(--neutral-200);
}

.theme-dark .search-input {
  background-color: var(--neutral-800);
  color: var(--white);
}

.theme-dark .search-input:hover {
  background-color: var(--neutral-700);
}

.search-icon {
  position: absolute;
  left: var(--space-3);
  height: 24px;
  width: 24px;
  pointer-events: none;
}

.search-hint {
  position: absolute;
  right: var(--space-3);
  top: 50%;
  transform: translateY(-50%);
  background-color: rgba(255, 255, 255, 0.15);
  padding: 6px;
  border-radius: var(--radius-sm);
  font-size: 0.75rem;
  line-height: 0.75rem;
  color: var(--neutral-400);
}

/* Login */
.login-button {
  background-color: var(--white);
  color: var(--black);
  padding: var(--space-2) var(--space-4);
  border: none;
  border-radius: var(--radius-lg);
  cursor: pointer;
  transition: transform var(--transition-fast) var(--easing-standard),
              background-color var(--transition-fast) var(--easing-standard);
}

.login-button:hover {
  background-color: var(--neutral-300);
  transform: scale(1.05);
}

.login-button:active {
  transform: scale(0.95);
}

/* Theme toggle */
.theme-toggle {
  margin-left: var(--space-4);
  background: none;
  border: none;
  cursor: pointer;
  color: inherit;
}

.icon {
  height: 24px;
  width: 24px;
}

/* Mobile menu */
.mobile-menu {
  display: none;
  height: var(--space-10);
  width: var(--space-10);
  justify-content: center;
  align-items: center;
  border: 1px solid rgba(127, 127, 127, 0.3);
  border-radius: var(--radius-lg);
}

@media (max-width: 639px) {
  .mobile-menu {
    display: inline-flex;
  }
}
"#;
