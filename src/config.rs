pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_STATIC_DIR: &str = ".";
pub const INDEX_FILE: &str = "index.html";

pub const ENV_HOST: &str = "HOST";
pub const ENV_PORT: &str = "PORT";
pub const ENV_STATIC_DIR: &str = "NAME_PINYIN_STATIC_DIR";

pub const DEFAULT_LOG_FILTER: &str = "name_pinyin=info";

pub const DEFAULT_SEPARATOR: &str = " ";

/// Two character family names, matched against the start of a normalized name
pub static COMPOUND_SURNAMES: &[&str] = &[
    "欧阳", "司马", "司徒", "司空", "上官", "诸葛", "尉迟", "长孙", "夏侯", "东方", "南宫",
    "公孙", "公羊", "公冶", "公良", "公西", "公输", "皇甫", "宇文", "轩辕", "令狐", "钟离",
    "独孤", "慕容", "闻人", "闾丘", "东郭", "西门", "南门", "北堂", "太史", "澹台", "濮阳",
    "第五", "仲孙", "叔孙", "申屠", "乐正", "拓跋", "赫连", "纳兰", "呼延", "宗政", "百里",
    "端木", "谷梁", "梁丘", "乌孙", "即墨", "宰父", "夹谷", "微生", "公皙", "公晞",
];

pub fn is_compound_surname(surname: &str) -> bool {
    COMPOUND_SURNAMES.contains(&surname)
}

/// Get the reading of a single character surname whose pronunciation as a
/// family name differs from the character's common reading
pub const fn surname_reading(surname_char: char) -> Option<&'static str> {
    Some(match surname_char {
        '单' => "shan",
        '曾' => "zeng",
        '解' => "xie",
        '区' => "ou",
        '乐' => "yue",
        '柏' => "bai",
        '任' => "ren",
        '翟' => "zhai",
        '殷' => "yin",
        _ => {
            return None;
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compound_surnames() {
        assert_eq!(COMPOUND_SURNAMES.len(), 54);
        assert!(COMPOUND_SURNAMES.iter().all(|s| s.chars().count() == 2));
        assert!(is_compound_surname("欧阳"));
        assert!(is_compound_surname("诸葛"));
        assert!(is_compound_surname("公晞"));
        assert!(!is_compound_surname("欧"));
        assert!(!is_compound_surname("欧阳锋"));
        assert!(!is_compound_surname(""));
    }

    #[test]
    fn test_surname_reading() {
        assert_eq!(surname_reading('单'), Some("shan"));
        assert_eq!(surname_reading('曾'), Some("zeng"));
        assert_eq!(surname_reading('区'), Some("ou"));
        assert_eq!(surname_reading('殷'), Some("yin"));
        assert_eq!(surname_reading('李'), None);
        assert_eq!(surname_reading('a'), None);
    }
}
