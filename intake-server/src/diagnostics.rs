//! 诊断规则引擎
//!
//! 根据设备序列号前缀和三个指示灯状态推导诊断结果。
//! 纯函数，无共享状态；规则按顺序匹配，首个命中即返回。
//!
//! # 规则表
//!
//! | 序列号前缀 | 指示灯条件 | 诊断结果 |
//! |-----------|-----------|---------|
//! | 24-X | (任意) | Please upgrade your device |
//! | 36-X | 全部 off | Turn on the device |
//! | 36-X | ≥2 个 blinking | Please wait |
//! | 36-X | 全部 on | ALL is ok |
//! | 36-X | 其他 | Unknown device |
//! | 51-B | 全部 off | Turn on the device |
//! | 51-B | 任一 blinking | Please wait |
//! | 51-B | >1 个 on (无 blinking) | ALL is ok |
//! | 51-B | 其他 | Unknown device |
//! | (纯数字) | - | Bad serial number |
//! | (其他) | - | Unknown device |

use std::fmt;

/// 诊断结果 - 固定的枚举集合
///
/// 计算一次后以字符串形式写入提交记录，之后不再变更
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseStatus {
    /// 设备需要升级
    UpgradeDevice,
    /// 设备未开机
    TurnOnDevice,
    /// 设备正忙，等待即可
    PleaseWait,
    /// 一切正常
    AllOk,
    /// 无法识别的设备
    UnknownDevice,
    /// 非法序列号
    BadSerialNumber,
}

impl ResponseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseStatus::UpgradeDevice => "Please upgrade your device",
            ResponseStatus::TurnOnDevice => "Turn on the device",
            ResponseStatus::PleaseWait => "Please wait",
            ResponseStatus::AllOk => "ALL is ok",
            ResponseStatus::UnknownDevice => "Unknown device",
            ResponseStatus::BadSerialNumber => "Bad serial number",
        }
    }
}

impl fmt::Display for ResponseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 计算诊断结果
///
/// 对任意输入都有定义（total）；指示灯取值不在 on/off/blinking 内时
/// 自然落入各前缀的 "其他" 分支。
pub fn calculate_response_status(
    device_serial_number: &str,
    light1: &str,
    light2: &str,
    light3: &str,
) -> ResponseStatus {
    let lights = [light1, light2, light3];
    let count = |value: &str| lights.iter().filter(|&&l| l == value).count();

    if device_serial_number.starts_with("24-X") {
        return ResponseStatus::UpgradeDevice;
    }

    if device_serial_number.starts_with("36-X") {
        return if count("off") == 3 {
            ResponseStatus::TurnOnDevice
        } else if count("blinking") >= 2 {
            ResponseStatus::PleaseWait
        } else if count("on") == 3 {
            ResponseStatus::AllOk
        } else {
            ResponseStatus::UnknownDevice
        };
    }

    if device_serial_number.starts_with("51-B") {
        return if count("off") == 3 {
            ResponseStatus::TurnOnDevice
        } else if count("blinking") >= 1 {
            ResponseStatus::PleaseWait
        } else if count("on") > 1 {
            ResponseStatus::AllOk
        } else {
            ResponseStatus::UnknownDevice
        };
    }

    // 无已知前缀：纯数字视为坏序列号，否则为未知设备
    if !device_serial_number.is_empty()
        && device_serial_number.chars().all(|c| c.is_ascii_digit())
    {
        ResponseStatus::BadSerialNumber
    } else {
        ResponseStatus::UnknownDevice
    }
}
