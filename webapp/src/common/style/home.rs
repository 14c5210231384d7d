pub const HOME_STYLES: &str = r#"
/* Demo page underneath the navigation bar */
.home-container {
  max-width: var(--container-width);
  margin: 0 auto;
  padding: calc(var(--header-height) + var(--space-12)) var(--space-4) var(--space-12);
}

.home-section {
  min-height: 60vh;
  padding: var(--space-12) 0;
  border-bottom: 1px solid var(--neutral-200);
}

.home-section h2 {
  font-size: 1.5rem;
  font-weight: 600;
  margin-bottom: var(--space-4);
}

.home-section p {
  color: var(--neutral-700);
  max-width: 720px;
}
"#;
