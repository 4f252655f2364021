//! 한국어

pub(in crate::i18n) const MESSAGES: &[(&str, &str)] = &[
  ("common.yes", "예"),
  ("common.no", "아니오"),
  ("common.help", "도움말"),
  ("common.ioError", "I/O 오류: {error}"),
  ("package.selectedPackage", "선택된 패키지"),
  ("changelog.usingDefault", "changelog가 없어 기본 버전 업그레이드 기록을 사용합니다"),
  ("changelog.defaultContent", "버전 업그레이드: {currentVersion} → {newVersion}"),
  (
    "changelog.header",
    "# Changelog\n\n이 프로젝트의 모든 중요한 변경 사항은 이 파일에 기록됩니다.\n\n형식은 [Keep a Changelog](https://keepachangelog.com/ko/1.0.0/)를 기반으로 하며,\n이 프로젝트는 [시맨틱 버전 관리](https://semver.org/lang/ko/)를 준수합니다.\n\n",
  ),
  ("changelogTypes.added", "추가됨"),
  ("changelogTypes.changed", "변경됨"),
  ("changelogTypes.deprecated", "사용중단됨"),
  ("changelogTypes.removed", "제거됨"),
  ("changelogTypes.fixed", "수정됨"),
  ("changelogTypes.security", "보안"),
  ("version.patch", "패치 버전 - 버그 수정"),
  ("version.minor", "마이너 버전 - 새 기능, 하위 호환"),
  ("version.major", "메이저 버전 - 호환되지 않는 변경"),
  ("version.invalidWithVersion", "잘못된 버전 번호: {version}"),
  ("version.cannotGenerate", "다음 버전을 생성할 수 없습니다"),
  ("script.running", "스크립트 실행 중"),
  ("script.success", "스크립트 실행 성공"),
  ("script.notFoundWithName", "스크립트 \"{name}\"을(를) 찾을 수 없습니다"),
  ("script.executionFailed", "스크립트 실행 실패, 종료 코드: {exitCode}"),
  ("git.createTagFailed", "git tag 생성 실패, 종료 코드: {exitCode}"),
  ("git.pushTagFailed", "git tag 푸시 실패, 종료 코드: {exitCode}"),
  ("git.repoNotFound", "git 저장소가 아닙니다: {path}"),
  ("git.deleteTagFailed", "git 태그 {tag} 삭제 실패, 종료 코드: {exitCode}: {stderr}"),
  ("registry.invalid", "올바른 URL을 입력하세요"),
  ("publish.preview", "배포 설정 미리보기"),
  ("publish.packageName", "패키지 이름"),
  ("publish.currentVersion", "현재 버전"),
  ("publish.newVersion", "새 버전"),
  ("publish.releaseType", "릴리스 유형"),
  ("publish.tag", "Tag"),
  ("publish.changelog", "Changelog"),
  ("publish.registry", "Registry"),
  ("publish.pushTag", "Tag 푸시"),
  ("publish.generateChangelog", "Changelog 생성"),
  ("publish.script", "스크립트"),
  ("publish.otp", "일회용 비밀번호(OTP)"),
  ("publish.confirm", "배포하시겠습니까? [y/N]"),
  ("publish.publishing", "npm에 배포 중..."),
  ("publish.success", "배포 성공!"),
  ("publish.failed", "배포 실패"),
  ("publish.cancelled", "배포가 취소되었습니다"),
  ("publish.dryRun", "시험 실행: 변경된 내용이 없습니다"),
  ("publish.error", "오류"),
  ("publish.npmPublishFailed", "npm 배포 실패, 종료 코드: {exitCode}"),
  (
    "publish.npmNotLoggedIn",
    "npm registry에 로그인되어 있지 않습니다: {registry}, 먼저 'npm login --registry {registry}'를 실행하세요",
  ),
  ("publish.npmAuthCheckFailed", "npm 로그인 상태 확인 실패 (registry: {registry}): {error}"),
  ("publish.otpInvalid", "일회용 비밀번호는 6자리 숫자여야 합니다"),
  ("publish.rollingBack", "배포에 실패하여 로컬 변경 사항을 롤백하는 중..."),
  ("publish.rollbackComplete", "로컬 변경 사항을 롤백했습니다"),
  (
    "publish.rollbackPartial",
    "롤백이 완전하지 않습니다. package.json, CHANGELOG.md, git tag를 직접 확인하세요",
  ),
  ("publish.rollbackStepFailed", "롤백 단계 실패: {step}: {error}"),
  (
    "publish.alreadyLive",
    "{packageName}@{version}은(는) 이미 {registry}에 배포되었습니다. 로컬 변경 사항만 롤백되었습니다",
  ),
  ("rollback.restoreVersion", "package.json 버전을 {version}(으)로 복원"),
  ("rollback.removeVersion", "package.json에서 version 필드 제거"),
  ("rollback.restoreChangelog", "CHANGELOG.md 복원"),
  ("rollback.removeChangelog", "CHANGELOG.md 삭제"),
  ("rollback.deleteTag", "로컬 tag {tag} 삭제"),
  ("success.title", "배포 성공!"),
  ("success.packageName", "패키지 이름"),
  ("success.version", "버전"),
  ("success.registry", "Registry"),
  ("success.tag", "Tag"),
  ("success.publisher", "배포 사용자"),
  ("success.thanks", "npm-push를 이용해 주셔서 감사합니다!"),
  ("workspace.packageJsonNotFound", "package.json 파일을 찾을 수 없습니다"),
  ("workspace.workspacesConfigInvalid", "workspaces 설정이 올바르지 않습니다"),
  ("workspace.packageNotFoundByQuery", "패키지를 찾을 수 없습니다: {query}"),
  ("workspace.monorepoRequiresPackage", "이 workspace에는 패키지가 {count}개 있습니다. --package로 선택하세요"),
  ("workspace.singlePackage", "단일 패키지 프로젝트"),
  ("workspace.multiPackage", "다중 패키지 workspace"),
  ("workspace.root", "루트"),
  ("config.invalid", "{path}의 설정이 올바르지 않습니다: {reason}"),
  ("config.unsupportedLocale", "지원하지 않는 언어: {code} (zh, en, ja, ko 중 하나)"),
  ("help.npmLogin", "`npm login --registry {registry}`를 실행한 후 다시 시도하세요."),
  ("help.gitRepo", "git 저장소 안에서 실행하거나 --push-tag 없이 배포하세요."),
  ("help.tagExists", "tag {tag}이(가) 이미 있을 수 있습니다. `git tag -d {tag}`로 삭제하거나 --tag를 지정하세요."),
  ("help.pushTagManually", "원격 저장소에 연결되면 직접 푸시하세요: git tag {tag} && git push {remote} {tag}"),
  ("help.selectPackage", "`npm-push list`로 패키지 목록을 확인하세요."),
];
