//! 简体中文

pub(in crate::i18n) const MESSAGES: &[(&str, &str)] = &[
  ("common.yes", "是"),
  ("common.no", "否"),
  ("common.help", "提示"),
  ("common.ioError", "I/O 错误: {error}"),
  ("package.selectedPackage", "已选择的包"),
  ("changelog.usingDefault", "未输入 changelog，使用默认的版本升级记录"),
  ("changelog.defaultContent", "版本升级: {currentVersion} → {newVersion}"),
  (
    "changelog.header",
    "# Changelog\n\n所有重要的项目变更都会记录在这个文件中。\n\n格式基于 [Keep a Changelog](https://keepachangelog.com/zh-CN/1.0.0/)，\n本项目遵循 [语义化版本](https://semver.org/lang/zh-CN/)。\n\n",
  ),
  ("changelogTypes.added", "新增"),
  ("changelogTypes.changed", "变更"),
  ("changelogTypes.deprecated", "废弃"),
  ("changelogTypes.removed", "移除"),
  ("changelogTypes.fixed", "修复"),
  ("changelogTypes.security", "安全"),
  ("version.patch", "补丁版本 - 修复 bug"),
  ("version.minor", "次版本 - 新功能，向后兼容"),
  ("version.major", "主版本 - 破坏性变更"),
  ("version.invalidWithVersion", "无效的版本号: {version}"),
  ("version.cannotGenerate", "无法生成下一个版本号"),
  ("script.running", "正在执行脚本"),
  ("script.success", "脚本执行成功"),
  ("script.notFoundWithName", "未找到脚本 \"{name}\""),
  ("script.executionFailed", "脚本执行失败，退出码: {exitCode}"),
  ("git.createTagFailed", "创建 git tag 失败，退出码: {exitCode}"),
  ("git.pushTagFailed", "推送 git tag 失败，退出码: {exitCode}"),
  ("git.repoNotFound", "不是 git 仓库: {path}"),
  ("git.deleteTagFailed", "删除 git 标签 {tag} 失败，退出码: {exitCode}: {stderr}"),
  ("registry.invalid", "请输入有效的 URL"),
  ("publish.preview", "发布配置预览"),
  ("publish.packageName", "包名"),
  ("publish.currentVersion", "当前版本"),
  ("publish.newVersion", "新版本"),
  ("publish.releaseType", "发布类型"),
  ("publish.tag", "Tag"),
  ("publish.changelog", "Changelog"),
  ("publish.registry", "Registry"),
  ("publish.pushTag", "推送 Tag"),
  ("publish.generateChangelog", "生成 Changelog"),
  ("publish.script", "脚本"),
  ("publish.otp", "一次性验证码（OTP）"),
  ("publish.confirm", "确认发布？[y/N]"),
  ("publish.publishing", "正在发布到 npm..."),
  ("publish.success", "发布成功！"),
  ("publish.failed", "发布失败"),
  ("publish.cancelled", "已取消发布"),
  ("publish.dryRun", "试运行：未做任何修改"),
  ("publish.error", "错误"),
  ("publish.npmPublishFailed", "npm 发布失败，退出码: {exitCode}"),
  (
    "publish.npmNotLoggedIn",
    "未登录 npm registry: {registry}，请先执行 'npm login --registry {registry}'",
  ),
  ("publish.npmAuthCheckFailed", "检查 npm 登录状态失败 (registry: {registry}): {error}"),
  ("publish.otpInvalid", "一次性验证码必须是 6 位数字"),
  ("publish.rollingBack", "发布失败，正在回滚本地修改..."),
  ("publish.rollbackComplete", "本地修改已回滚"),
  (
    "publish.rollbackPartial",
    "回滚未完全成功，请手动检查 package.json、CHANGELOG.md 和 git tag",
  ),
  ("publish.rollbackStepFailed", "回滚步骤失败: {step}: {error}"),
  (
    "publish.alreadyLive",
    "{packageName}@{version} 已经发布到 {registry}，仅回滚了本地修改",
  ),
  ("rollback.restoreVersion", "将 package.json 版本恢复为 {version}"),
  ("rollback.removeVersion", "从 package.json 中移除 version 字段"),
  ("rollback.restoreChangelog", "恢复 CHANGELOG.md"),
  ("rollback.removeChangelog", "删除 CHANGELOG.md"),
  ("rollback.deleteTag", "删除本地 tag {tag}"),
  ("success.title", "发布成功！"),
  ("success.packageName", "包名"),
  ("success.version", "版本"),
  ("success.registry", "Registry"),
  ("success.tag", "Tag"),
  ("success.publisher", "发布用户"),
  ("success.thanks", "感谢使用 npm-push！"),
  ("workspace.packageJsonNotFound", "未找到 package.json 文件"),
  ("workspace.workspacesConfigInvalid", "workspaces 配置无效"),
  ("workspace.packageNotFoundByQuery", "未找到包: {query}"),
  ("workspace.monorepoRequiresPackage", "该 workspace 包含 {count} 个包，请使用 --package 选择"),
  ("workspace.singlePackage", "单包项目"),
  ("workspace.multiPackage", "多包 workspace"),
  ("workspace.root", "根目录"),
  ("config.invalid", "{path} 中的配置无效: {reason}"),
  ("config.unsupportedLocale", "不支持的语言: {code}（可选 zh、en、ja、ko）"),
  ("help.npmLogin", "请执行 `npm login --registry {registry}` 后重试。"),
  ("help.gitRepo", "请在 git 仓库中运行，或不使用 --push-tag 发布。"),
  ("help.tagExists", "tag {tag} 可能已存在，可用 `git tag -d {tag}` 删除或通过 --tag 指定。"),
  ("help.pushTagManually", "远程可用后请手动推送: git tag {tag} && git push {remote} {tag}"),
  ("help.selectPackage", "使用 `npm-push list` 查看所有包。"),
];
