//! English messages

pub(in crate::i18n) const MESSAGES: &[(&str, &str)] = &[
  // Common
  ("common.yes", "Yes"),
  ("common.no", "No"),
  ("common.help", "Help"),
  ("common.ioError", "I/O error: {error}"),
  // Package selection
  ("package.selectedPackage", "Selected package"),
  // Changelog
  ("changelog.usingDefault", "No changelog given, using the default version upgrade entry"),
  ("changelog.defaultContent", "Version upgrade: {currentVersion} → {newVersion}"),
  (
    "changelog.header",
    "# Changelog\n\nAll notable changes to this project will be documented in this file.\n\nThe format is based on [Keep a Changelog](https://keepachangelog.com/en/1.0.0/),\nand this project adheres to [Semantic Versioning](https://semver.org/spec/v2.0.0.html).\n\n",
  ),
  // Changelog categories
  ("changelogTypes.added", "Added"),
  ("changelogTypes.changed", "Changed"),
  ("changelogTypes.deprecated", "Deprecated"),
  ("changelogTypes.removed", "Removed"),
  ("changelogTypes.fixed", "Fixed"),
  ("changelogTypes.security", "Security"),
  // Version
  ("version.patch", "Patch - bug fixes"),
  ("version.minor", "Minor - new features, backward compatible"),
  ("version.major", "Major - breaking changes"),
  ("version.invalidWithVersion", "Invalid version: {version}"),
  ("version.cannotGenerate", "Cannot generate the next version"),
  // Scripts
  ("script.running", "Running script"),
  ("script.success", "Script succeeded"),
  ("script.notFoundWithName", "Script \"{name}\" not found"),
  ("script.executionFailed", "Script execution failed, exit code: {exitCode}"),
  // Git
  ("git.createTagFailed", "Failed to create git tag, exit code: {exitCode}"),
  ("git.pushTagFailed", "Failed to push git tag, exit code: {exitCode}"),
  ("git.repoNotFound", "Not a git repository: {path}"),
  ("git.deleteTagFailed", "Failed to delete git tag {tag}, exit code: {exitCode}: {stderr}"),
  // Registry
  ("registry.invalid", "Please enter a valid URL"),
  // Publish
  ("publish.preview", "Publish preview"),
  ("publish.packageName", "Package"),
  ("publish.currentVersion", "Current version"),
  ("publish.newVersion", "New version"),
  ("publish.releaseType", "Release type"),
  ("publish.tag", "Tag"),
  ("publish.changelog", "Changelog"),
  ("publish.registry", "Registry"),
  ("publish.pushTag", "Push tag"),
  ("publish.generateChangelog", "Generate changelog"),
  ("publish.script", "Script"),
  ("publish.otp", "One-time password (OTP)"),
  ("publish.confirm", "Confirm publish? [y/N]"),
  ("publish.publishing", "Publishing to npm..."),
  ("publish.success", "Published successfully!"),
  ("publish.failed", "Publish failed"),
  ("publish.cancelled", "Publish cancelled"),
  ("publish.dryRun", "Dry run: nothing was changed"),
  ("publish.error", "Error"),
  ("publish.npmPublishFailed", "npm publish failed, exit code: {exitCode}"),
  (
    "publish.npmNotLoggedIn",
    "Not logged in to npm registry: {registry}, run 'npm login --registry {registry}' first",
  ),
  ("publish.npmAuthCheckFailed", "Failed to check npm login status (registry: {registry}): {error}"),
  ("publish.otpInvalid", "The one-time password must be 6 digits"),
  ("publish.rollingBack", "Publish failed, rolling back local changes..."),
  ("publish.rollbackComplete", "Local changes rolled back"),
  (
    "publish.rollbackPartial",
    "Rollback was incomplete; check package.json, CHANGELOG.md and git tags by hand",
  ),
  ("publish.rollbackStepFailed", "Rollback step failed: {step}: {error}"),
  (
    "publish.alreadyLive",
    "{packageName}@{version} is already live on {registry}; only local changes were rolled back",
  ),
  // Rollback steps
  ("rollback.restoreVersion", "restore package.json version to {version}"),
  ("rollback.removeVersion", "remove the version field from package.json"),
  ("rollback.restoreChangelog", "restore CHANGELOG.md"),
  ("rollback.removeChangelog", "remove CHANGELOG.md"),
  ("rollback.deleteTag", "delete local tag {tag}"),
  // Success
  ("success.title", "Published successfully!"),
  ("success.packageName", "Package"),
  ("success.version", "Version"),
  ("success.registry", "Registry"),
  ("success.tag", "Tag"),
  ("success.publisher", "Published as"),
  ("success.thanks", "Thanks for using npm-push!"),
  // Workspace
  ("workspace.packageJsonNotFound", "package.json not found"),
  ("workspace.workspacesConfigInvalid", "Invalid workspaces configuration"),
  ("workspace.packageNotFoundByQuery", "Package not found: {query}"),
  (
    "workspace.monorepoRequiresPackage",
    "This workspace has {count} packages; choose one with --package",
  ),
  ("workspace.singlePackage", "Single-package project"),
  ("workspace.multiPackage", "Multi-package workspace"),
  ("workspace.root", "Root"),
  // Config
  ("config.invalid", "Invalid configuration in {path}: {reason}"),
  ("config.unsupportedLocale", "Unsupported language: {code} (expected zh, en, ja or ko)"),
  // Help
  ("help.npmLogin", "Run `npm login --registry {registry}` and try again."),
  ("help.gitRepo", "Run npm-push inside a git repository, or publish without --push-tag."),
  ("help.tagExists", "The tag {tag} may already exist; delete it with `git tag -d {tag}` or pass --tag."),
  ("help.pushTagManually", "Push the tag by hand once the remote is reachable: git tag {tag} && git push {remote} {tag}"),
  ("help.selectPackage", "List packages with `npm-push list`."),
];
