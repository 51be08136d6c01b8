use std::fmt;

#[derive(Debug, Clone)]
pub enum DsaLabError {
    Validation(String),
    NotFound(String),
    CapacityExceeded(String),
    InvalidVertex(String),
    DivisionByZero(String),
    FileOperation(String),
}

impl DsaLabError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            DsaLabError::Validation(_) => "E001",
            DsaLabError::NotFound(_) => "E002",
            DsaLabError::CapacityExceeded(_) => "E003",
            DsaLabError::InvalidVertex(_) => "E004",
            DsaLabError::DivisionByZero(_) => "E005",
            DsaLabError::FileOperation(_) => "E006",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            DsaLabError::Validation(_) => "Validation Error",
            DsaLabError::NotFound(_) => "Value Not Found",
            DsaLabError::CapacityExceeded(_) => "Capacity Exceeded",
            DsaLabError::InvalidVertex(_) => "Invalid Vertex",
            DsaLabError::DivisionByZero(_) => "Division By Zero",
            DsaLabError::FileOperation(_) => "File Operation Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            DsaLabError::Validation(msg) => msg,
            DsaLabError::NotFound(msg) => msg,
            DsaLabError::CapacityExceeded(msg) => msg,
            DsaLabError::InvalidVertex(msg) => msg,
            DsaLabError::DivisionByZero(msg) => msg,
            DsaLabError::FileOperation(msg) => msg,
        }
    }

    /// 格式化为彩色输出
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for DsaLabError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // 默认使用简洁格式
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for DsaLabError {}

// 便捷的构造函数
impl DsaLabError {
    pub fn validation<T: Into<String>>(msg: T) -> Self {
        DsaLabError::Validation(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        DsaLabError::NotFound(msg.into())
    }

    pub fn capacity_exceeded<T: Into<String>>(msg: T) -> Self {
        DsaLabError::CapacityExceeded(msg.into())
    }

    pub fn invalid_vertex<T: Into<String>>(msg: T) -> Self {
        DsaLabError::InvalidVertex(msg.into())
    }

    pub fn division_by_zero<T: Into<String>>(msg: T) -> Self {
        DsaLabError::DivisionByZero(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        DsaLabError::FileOperation(msg.into())
    }
}

impl From<std::io::Error> for DsaLabError {
    fn from(err: std::io::Error) -> Self {
        DsaLabError::FileOperation(err.to_string())
    }
}
