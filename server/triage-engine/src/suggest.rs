//! Rule-based fix suggestions, one strategy per error kind.
//!
//! Every strategy returns at least one suggestion. Commands target the npm
//! toolchain used by the CI pipelines we triage.

use crate::types::{ErrorKind, ErrorRecord, FixSuggestion};

const LINT_FIX: &str = "npx eslint . --fix";
const CLEAN_BUILD: &str = "rm -rf dist .next node_modules/.cache && npm run build";
const INSTALL_DEPS: &str = "npm ci";
const AUDIT_FIX: &str = "npm audit fix";
const AUDIT_FIX_FORCE: &str = "npm audit fix --force";

const BUNDLER_KEYWORDS: &[&str] = &["webpack", "vite", "rollup", "esbuild", "turbopack", "parcel", "cache"];
const DEPLOY_AUTH_KEYWORDS: &[&str] = &["auth", "token", "unauthorized", "forbidden", "401", "403"];

/// Ordered fix suggestions for one record. Never empty.
pub fn suggest(record: &ErrorRecord) -> Vec<FixSuggestion> {
  let msg = record.message.to_lowercase();
  match record.kind {
    ErrorKind::Eslint => eslint(record),
    ErrorKind::Typescript => typescript(&msg),
    ErrorKind::Build => build(&msg),
    ErrorKind::Deploy => deploy(&msg),
    ErrorKind::Security => security(&msg),
    ErrorKind::Dependency => dependency(&msg),
    ErrorKind::Configuration => configuration(&msg),
    ErrorKind::Test => failing_test(record),
    ErrorKind::Unknown => unknown(),
  }
}

fn contains_any(msg: &str, needles: &[&str]) -> bool {
  needles.iter().any(|n| msg.contains(n))
}

fn steps(items: &[&str]) -> Vec<String> {
  items.iter().map(|s| s.to_string()).collect()
}

fn eslint(record: &ErrorRecord) -> Vec<FixSuggestion> {
  let mut out = vec![FixSuggestion::auto(
    "Run ESLint auto-fix",
    "Let ESLint rewrite every automatically fixable violation",
    LINT_FIX,
  )
  .with_estimated_time("1 min")];

  if let (Some(file), Some(line)) = (&record.file, record.line) {
    let rule_step = match &record.rule {
      Some(rule) => format!("Check the documentation for the `{}` rule", rule),
      None => "Check the ESLint documentation for the reported rule".to_string(),
    };
    out.push(
      FixSuggestion::manual(
        "Fix lint error manually",
        format!("Resolve the violation at {}:{}", file, line),
        vec![
          format!("Open {}", file),
          format!("Go to line {}", line),
          format!("Address: {}", record.message),
          rule_step,
        ],
      )
      .with_estimated_time("2-5 min"),
    );
  }

  out
}

fn typescript(msg: &str) -> Vec<FixSuggestion> {
  let mut out = vec![FixSuggestion::manual(
    "Fix type error",
    "Align the value with the type the compiler expects",
    steps(&[
      "Open the file at the reported line",
      "Compare the expected type with the actual type",
      "Update the value, annotation or interface so they agree",
      "Re-run `npx tsc --noEmit` to confirm",
    ]),
  )
  .with_estimated_time("5-15 min")];

  if msg.contains("cannot find name") || msg.contains("cannot find module") {
    out.push(
      FixSuggestion::manual(
        "Add missing import",
        "The identifier or module is not in scope",
        steps(&[
          "Check the spelling of the missing name or module path",
          "Add the import statement at the top of the file",
          "Install the package and its @types if the module is external",
        ]),
      )
      .with_estimated_time("2 min"),
    );
  }

  if msg.contains("any") {
    out.push(
      FixSuggestion::manual(
        "Replace `any` type",
        "Give the value an explicit type instead of `any`",
        steps(&[
          "Find where the value is declared or inferred as `any`",
          "Define an interface or type alias describing its shape",
          "Annotate the value with the new type",
        ]),
      )
      .with_estimated_time("5-10 min"),
    );
  }

  out
}

fn build(msg: &str) -> Vec<FixSuggestion> {
  let mut out = vec![FixSuggestion::auto(
    "Clean and rebuild",
    "Remove build artifacts and caches, then build from scratch",
    CLEAN_BUILD,
  )
  .with_estimated_time("2-5 min")];

  if msg.contains("module not found") || msg.contains("cannot resolve") {
    out.push(
      FixSuggestion::auto(
        "Install dependencies",
        "A module could not be resolved; reinstall from the lockfile",
        INSTALL_DEPS,
      )
      .with_estimated_time("1-3 min"),
    );
  }

  if contains_any(msg, BUNDLER_KEYWORDS) {
    out.push(
      FixSuggestion::manual(
        "Clear bundler cache",
        "A stale bundler or CI cache can break an otherwise valid build",
        steps(&[
          "Delete node_modules/.cache and the bundler's cache directory",
          "Invalidate the dependency cache in the CI workflow",
          "Re-run the pipeline",
        ]),
      )
      .with_estimated_time("5 min"),
    );
  }

  out
}

fn deploy(msg: &str) -> Vec<FixSuggestion> {
  let mut out = Vec::new();

  if contains_any(msg, DEPLOY_AUTH_KEYWORDS) {
    out.push(
      FixSuggestion::manual(
        "Verify deployment token",
        "The deploy step could not authenticate with the hosting provider",
        steps(&[
          "Generate a new API token in the hosting provider's account settings",
          "Update the token secret in the repository's CI settings",
          "Confirm the workflow reads the secret under the expected name",
          "Re-run the deployment",
        ]),
      )
      .with_estimated_time("5 min"),
    );
  }

  if msg.contains("project") || msg.contains("not found") {
    out.push(
      FixSuggestion::manual(
        "Verify deployment target",
        "The configured project or site could not be found",
        steps(&[
          "Check the project/site ID configured for the deploy step",
          "Confirm the token has access to that project",
          "Link the repository to the project again if it was recreated",
        ]),
      )
      .with_estimated_time("5-10 min"),
    );
  }

  if msg.contains("build") || msg.contains("output") {
    out.push(
      FixSuggestion::manual(
        "Check build output directory",
        "The deploy step expects build artifacts at a different path",
        steps(&[
          "Find the output directory the build step writes to",
          "Compare it with the publish directory configured for deployment",
          "Make both paths agree and re-run the pipeline",
        ]),
      )
      .with_estimated_time("5 min"),
    );
  }

  if out.is_empty() {
    out.push(FixSuggestion::manual(
      "Investigate deployment failure",
      "No known deployment failure pattern matched",
      steps(&[
        "Open the full deploy log for the failing step",
        "Check the hosting provider's status page and dashboard",
        "Re-run the deployment once the cause is addressed",
      ]),
    ));
  }

  out
}

fn security(msg: &str) -> Vec<FixSuggestion> {
  let mut out = vec![FixSuggestion::auto(
    "Run npm audit fix",
    "Upgrade vulnerable packages within their allowed semver ranges",
    AUDIT_FIX,
  )
  .with_estimated_time("1-2 min")];

  if msg.contains("high") || msg.contains("critical") {
    out.push(
      FixSuggestion::auto(
        "Force audit fix",
        "Apply fixes that require breaking major-version upgrades",
        AUDIT_FIX_FORCE,
      )
      .with_estimated_time("2-5 min"),
    );
    out.push(
      FixSuggestion::manual(
        "Manual security review",
        "High-severity findings need a human decision",
        steps(&[
          "Run `npm audit` to list the affected packages",
          "Inspect the report for the vulnerable dependency paths",
          "Evaluate upgrading, replacing or removing each affected package",
          "Re-run the test suite after any forced upgrade",
        ]),
      )
      .with_estimated_time("15-30 min"),
    );
  }

  out
}

fn dependency(msg: &str) -> Vec<FixSuggestion> {
  let mut out = vec![FixSuggestion::auto(
    "Install dependencies",
    "Reinstall packages exactly as pinned in the lockfile",
    INSTALL_DEPS,
  )
  .with_estimated_time("1-3 min")];

  if msg.contains("peer") {
    out.push(
      FixSuggestion::manual(
        "Fix peer dependencies",
        "Installed versions do not satisfy a package's peer requirements",
        steps(&[
          "Run `npm ls` to find the conflicting peer dependency",
          "Upgrade or pin the package to a version the peer range accepts",
          "Commit the updated lockfile",
        ]),
      )
      .with_estimated_time("5-10 min"),
    );
  }

  out
}

fn configuration(msg: &str) -> Vec<FixSuggestion> {
  let mut out = Vec::new();

  if msg.contains("env") || msg.contains("environment") {
    out.push(
      FixSuggestion::manual(
        "Configure environment variables",
        "A required environment variable is missing or invalid",
        steps(&[
          "List the variables the app expects in .env.example",
          "Copy .env.example to .env.local and fill in the values",
          "Add the same variables to the CI and hosting environment settings",
        ]),
      )
      .with_estimated_time("5 min"),
    );
  }

  out.push(
    FixSuggestion::manual(
      "Review configuration files",
      "Check configuration for syntax errors and invalid values",
      steps(&[
        "Validate the syntax of the config file named in the log",
        "Compare settings against the tool's documented options",
        "Revert recent configuration changes if the error is new",
      ]),
    )
    .with_estimated_time("5-10 min"),
  );

  out
}

fn failing_test(record: &ErrorRecord) -> Vec<FixSuggestion> {
  vec![FixSuggestion::manual(
    "Fix failing test",
    format!("Test failed: {}", record.message),
    steps(&[
      "Reproduce the failure locally with `npm test`",
      "Decide whether the code or the test expectation is wrong",
      "Fix it and re-run the suite to verify",
    ]),
  )
  .with_estimated_time("10-30 min")]
}

fn unknown() -> Vec<FixSuggestion> {
  vec![FixSuggestion::manual(
    "Investigate error",
    "The error did not match a known pattern",
    steps(&[
      "Read the full log excerpt around the error",
      "Search the project's issues and docs for the message",
      "Reproduce locally to narrow down the cause",
    ]),
  )]
}
