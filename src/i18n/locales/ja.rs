//! 日本語

pub(in crate::i18n) const MESSAGES: &[(&str, &str)] = &[
  ("common.yes", "はい"),
  ("common.no", "いいえ"),
  ("common.help", "ヒント"),
  ("common.ioError", "I/O エラー: {error}"),
  ("package.selectedPackage", "選択されたパッケージ"),
  ("changelog.usingDefault", "デフォルトのchangelogを使用：バージョンアップグレード記録"),
  ("changelog.defaultContent", "バージョンアップグレード: {currentVersion} → {newVersion}"),
  (
    "changelog.header",
    "# Changelog\n\nこのプロジェクトの重要な変更はすべてこのファイルに記録されます。\n\n形式は [Keep a Changelog](https://keepachangelog.com/ja/1.0.0/) に基づいており、\nこのプロジェクトは [セマンティックバージョニング](https://semver.org/lang/ja/) に準拠しています。\n\n",
  ),
  ("changelogTypes.added", "追加"),
  ("changelogTypes.changed", "変更"),
  ("changelogTypes.deprecated", "非推奨"),
  ("changelogTypes.removed", "削除"),
  ("changelogTypes.fixed", "修正"),
  ("changelogTypes.security", "セキュリティ"),
  ("version.patch", "パッチバージョン - バグ修正"),
  ("version.minor", "マイナーバージョン - 新機能、後方互換"),
  ("version.major", "メジャーバージョン - 破壊的変更"),
  ("version.invalidWithVersion", "無効なバージョン番号: {version}"),
  ("version.cannotGenerate", "次のバージョンを生成できません"),
  ("script.running", "スクリプトを実行中"),
  ("script.success", "スクリプトの実行に成功しました"),
  ("script.notFoundWithName", "スクリプト \"{name}\" が見つかりません"),
  ("script.executionFailed", "スクリプトの実行に失敗しました、終了コード: {exitCode}"),
  ("git.createTagFailed", "git tagの作成に失敗しました、終了コード: {exitCode}"),
  ("git.pushTagFailed", "git tagのプッシュに失敗しました、終了コード: {exitCode}"),
  ("git.repoNotFound", "gitリポジトリではありません: {path}"),
  ("git.deleteTagFailed", "gitタグ {tag} の削除に失敗しました。終了コード: {exitCode}: {stderr}"),
  ("registry.invalid", "有効なURLを入力してください"),
  ("publish.preview", "公開設定プレビュー"),
  ("publish.packageName", "パッケージ名"),
  ("publish.currentVersion", "現在のバージョン"),
  ("publish.newVersion", "新しいバージョン"),
  ("publish.releaseType", "リリースタイプ"),
  ("publish.tag", "Tag"),
  ("publish.changelog", "Changelog"),
  ("publish.registry", "Registry"),
  ("publish.pushTag", "Tagをプッシュ"),
  ("publish.generateChangelog", "Changelogを生成"),
  ("publish.script", "スクリプト"),
  ("publish.otp", "ワンタイムコード（OTP）"),
  ("publish.confirm", "公開を確認しますか？ [y/N]"),
  ("publish.publishing", "npmに公開中..."),
  ("publish.success", "公開に成功しました！"),
  ("publish.failed", "公開に失敗しました"),
  ("publish.cancelled", "公開がキャンセルされました"),
  ("publish.dryRun", "ドライラン：変更は行われていません"),
  ("publish.error", "エラー"),
  ("publish.npmPublishFailed", "npm公開に失敗しました、終了コード: {exitCode}"),
  (
    "publish.npmNotLoggedIn",
    "npm registry にログインしていません: {registry}，先に 'npm login --registry {registry}' を実行してください",
  ),
  ("publish.npmAuthCheckFailed", "npm ログイン状態の確認に失敗しました (registry: {registry}): {error}"),
  ("publish.otpInvalid", "ワンタイムコードは6桁の数字である必要があります"),
  ("publish.rollingBack", "公開に失敗しました。ローカルの変更をロールバックしています..."),
  ("publish.rollbackComplete", "ローカルの変更をロールバックしました"),
  (
    "publish.rollbackPartial",
    "ロールバックが完了しませんでした。package.json、CHANGELOG.md、git tagを手動で確認してください",
  ),
  ("publish.rollbackStepFailed", "ロールバック手順に失敗しました: {step}: {error}"),
  (
    "publish.alreadyLive",
    "{packageName}@{version} はすでに {registry} に公開されています。ロールバックされたのはローカルの変更のみです",
  ),
  ("rollback.restoreVersion", "package.jsonのバージョンを {version} に戻す"),
  ("rollback.removeVersion", "package.jsonからversionフィールドを削除する"),
  ("rollback.restoreChangelog", "CHANGELOG.mdを復元する"),
  ("rollback.removeChangelog", "CHANGELOG.mdを削除する"),
  ("rollback.deleteTag", "ローカルtag {tag} を削除する"),
  ("success.title", "公開に成功しました！"),
  ("success.packageName", "パッケージ名"),
  ("success.version", "バージョン"),
  ("success.registry", "Registry"),
  ("success.tag", "Tag"),
  ("success.publisher", "公開ユーザー"),
  ("success.thanks", "npm-pushをご利用いただきありがとうございます！"),
  ("workspace.packageJsonNotFound", "package.jsonファイルが見つかりません"),
  ("workspace.workspacesConfigInvalid", "workspaces設定が無効です"),
  ("workspace.packageNotFoundByQuery", "パッケージが見つかりません: {query}"),
  (
    "workspace.monorepoRequiresPackage",
    "このworkspaceには {count} 個のパッケージがあります。--package で選択してください",
  ),
  ("workspace.singlePackage", "単一パッケージプロジェクト"),
  ("workspace.multiPackage", "マルチパッケージworkspace"),
  ("workspace.root", "ルート"),
  ("config.invalid", "{path} の設定が無効です: {reason}"),
  ("config.unsupportedLocale", "サポートされていない言語: {code}（zh、en、ja、ko のいずれか）"),
  ("help.npmLogin", "`npm login --registry {registry}` を実行してから再試行してください。"),
  ("help.gitRepo", "gitリポジトリ内で実行するか、--push-tag なしで公開してください。"),
  ("help.tagExists", "tag {tag} はすでに存在する可能性があります。`git tag -d {tag}` で削除するか --tag を指定してください。"),
  ("help.pushTagManually", "リモートに接続できるようになったら手動でプッシュしてください: git tag {tag} && git push {remote} {tag}"),
  ("help.selectPackage", "`npm-push list` でパッケージ一覧を表示できます。"),
];
