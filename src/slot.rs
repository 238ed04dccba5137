//! 单槽密钥状态：`Absent | Loaded(key)`。
//!
//! 槽只允许 `Absent → Loaded` 和 `Loaded → Loaded`（原地替换），
//! 不存在回到 `Absent` 的转换。

use crate::common::errors::{Error, Result};

/// 持有零个或一个密钥的显式状态
#[derive(Clone, Debug, Default)]
pub enum KeySlot<T> {
    #[default]
    Absent,
    Loaded(T),
}

impl<T> KeySlot<T> {
    /// 装入新密钥并返回其引用
    pub fn insert(&mut self, key: T) -> &T {
        *self = KeySlot::Loaded(key);
        match self {
            KeySlot::Loaded(key) => key,
            KeySlot::Absent => unreachable!("slot was just loaded"),
        }
    }

    pub fn get(&self) -> Option<&T> {
        match self {
            KeySlot::Absent => None,
            KeySlot::Loaded(key) => Some(key),
        }
    }

    /// 取出已装入的密钥，槽为空时返回 `missing` 构造的错误
    pub fn require(&self, missing: impl FnOnce() -> Error) -> Result<&T> {
        self.get().ok_or_else(missing)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, KeySlot::Loaded(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_starts_absent() {
        let slot: KeySlot<u8> = KeySlot::default();
        assert!(!slot.is_loaded());
        assert!(slot.get().is_none());
        assert!(matches!(slot.require(|| Error::NoKey), Err(Error::NoKey)));
    }

    #[test]
    fn test_slot_replace_in_place() {
        let mut slot = KeySlot::Absent;
        slot.insert(1);
        slot.insert(2);
        assert_eq!(*slot.require(|| Error::NoSymmetricKey).unwrap(), 2);
        assert!(slot.is_loaded());
    }

    #[test]
    fn test_slot_insert_returns_new_key() {
        let mut slot = KeySlot::Loaded("old");
        assert_eq!(*slot.insert("new"), "new");
        assert_eq!(slot.get(), Some(&"new"));
    }
}
