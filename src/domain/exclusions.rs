/// 始终排除的目录（依赖、构建产物、文档以及第三方资源包）
pub const BASE_EXCLUDES: &[&str] = &[
    "dependencies",
    "externals",
    "scripts",
    "build/cmake",
    "build/Frameworks",
    ".git",
    "doc",
    "docs",
    "libproxyobject/plugins/ogre/data/ace",
    "libproxyobject/plugins/ogre/data/labjs",
    "libproxyobject/plugins/ogre/data/jquery_themes",
    "libproxyobject/plugins/ogre/data/jquery_plugins",
    "libproxyobject/plugins/ogre/data/jquery",
    "liboh/plugins/js/emerson/alt_regress",
    "liboh/plugins/js/emerson/regression",
];

/// 相对路径前缀
pub const RELATIVE_PREFIX: &str = "./";

/// grep 的目录排除参数前缀
pub const EXCLUDE_DIR_FLAG: &str = "--exclude-dir=";

/// 排除目录列表
///
/// 由基础列表加上每一项的 `./` 前缀版本组成，构造后不可修改。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionList {
    dirs: Vec<String>,
}

impl ExclusionList {
    /// 根据基础列表构建排除列表：`base ++ ["./" + b for b in base]`
    pub fn from_base<I, S>(base: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let base: Vec<String> = base.into_iter().map(|s| s.as_ref().to_string()).collect();
        let relative = base
            .iter()
            .map(|dir| format!("{}{}", RELATIVE_PREFIX, dir))
            .collect::<Vec<_>>();

        let mut dirs = base;
        dirs.extend(relative);
        Self { dirs }
    }

    /// 使用内置的基础列表
    pub fn standard() -> Self {
        Self::from_base(BASE_EXCLUDES.iter().copied())
    }

    pub fn dirs(&self) -> &[String] {
        &self.dirs
    }

    pub fn len(&self) -> usize {
        self.dirs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty()
    }

    /// 每个排除目录对应一个 `--exclude-dir=<name>` 参数，顺序不变
    pub fn flags(&self) -> impl Iterator<Item = String> + '_ {
        self.dirs
            .iter()
            .map(|dir| format!("{}{}", EXCLUDE_DIR_FLAG, dir))
    }
}

impl Default for ExclusionList {
    fn default() -> Self {
        Self::standard()
    }
}
