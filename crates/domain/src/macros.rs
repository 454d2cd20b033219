/// 最大文字数付き String Newtype を定義する宣言型マクロ
///
/// 以下のボイラープレートを一括生成する:
/// - Newtype 構造体（`String` をラップ）
/// - `new()`: 最大長チェック（`chars().count()` でカウント）
/// - `as_str()`: 文字列参照
/// - `into_string()`: 所有権を持つ文字列に変換
/// - `is_blank()`: 空白のみ（または空文字列）かどうか
/// - `Display` impl
///
/// `VARCHAR(n)` カラムにそのまま格納するため、trim は行わない。
/// 空白のみの値を「未指定」として扱うかどうかは呼び出し側が `is_blank()` で判断する。
///
/// # 使用例
///
/// ```rust
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use hrcore_domain::employee::Department;
///
/// let department = Department::new("Eng")?;
/// assert_eq!(department.as_str(), "Eng");
/// assert!(Department::new("x".repeat(51)).is_err());
/// # Ok(())
/// # }
/// ```
macro_rules! define_bounded_string {
    (
        $(#[$meta:meta])*
        $vis:vis struct $Name:ident {
            label: $label:expr,
            max_length: $max_length:expr $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        $vis struct $Name(String);

        impl $Name {
            /// 最大文字数を超えていないことを検証して生成する
            pub fn new(value: impl Into<String>) -> Result<Self, $crate::DomainError> {
                let value = value.into();

                if value.chars().count() > $max_length {
                    return Err($crate::DomainError::Validation(format!(
                        "{}は {} 文字以内である必要があります",
                        $label, $max_length
                    )));
                }

                Ok(Self(value))
            }

            /// 文字列参照を取得する
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// 所有権を持つ文字列に変換する
            pub fn into_string(self) -> String {
                self.0
            }

            /// 空文字列または空白のみで構成されているか
            pub fn is_blank(&self) -> bool {
                self.0.trim().is_empty()
            }
        }

        impl std::fmt::Display for $Name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}
