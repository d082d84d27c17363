//! Conversion between CoreFoundation property lists and store values.

use crate::store::{Dictionary, StoreValue};
use core_foundation::array::CFArray;
use core_foundation::base::{CFType, TCFType};
use core_foundation::dictionary::CFDictionary;
use core_foundation::propertylist::CFPropertyList;
use core_foundation::string::CFString;

/// Convert a property list dictionary. Entries whose key is not a string or
/// whose value is neither a string nor an array of strings are skipped.
pub(crate) fn dictionary_from_cf(dict: &CFDictionary) -> Dictionary {
    let mut map = Dictionary::new();
    let (keys, values) = dict.get_keys_and_values();
    for (cf_key, cf_value) in keys.into_iter().zip(values) {
        // SAFETY: keys and values are borrowed from `dict`, which outlives this loop.
        let key = unsafe { CFType::wrap_under_get_rule(cf_key) };
        let key = match key.downcast::<CFString>() {
            Some(key) => key.to_string(),
            None => continue,
        };
        let value = unsafe { CFPropertyList::wrap_under_get_rule(cf_value) };
        if let Some(value) = value_from_cf(&value) {
            map.insert(key, value);
        }
    }
    map
}

pub(crate) fn value_from_cf(plist: &CFPropertyList) -> Option<StoreValue> {
    if let Some(s) = plist.downcast::<CFString>() {
        return Some(StoreValue::String(s.to_string()));
    }
    let array = plist.downcast::<CFArray>()?;
    let mut items = Vec::new();
    for cf_item in array.get_all_values() {
        // SAFETY: the element is kept alive by `array`.
        let item = unsafe { CFType::wrap_under_get_rule(cf_item) };
        items.push(item.downcast::<CFString>()?.to_string());
    }
    Some(StoreValue::Array(items))
}

pub(crate) fn dictionary_to_cf(dict: &Dictionary) -> CFDictionary {
    let pairs: Vec<(CFString, CFType)> = dict
        .iter()
        .map(|(key, value)| (CFString::new(key), value_to_cf(value)))
        .collect();
    CFDictionary::from_CFType_pairs(&pairs).into_untyped()
}

fn value_to_cf(value: &StoreValue) -> CFType {
    match value {
        StoreValue::String(s) => CFString::new(s).into_CFType(),
        StoreValue::Array(a) => {
            let items: Vec<CFString> = a.iter().map(|s| CFString::new(s)).collect();
            CFArray::from_CFTypes(&items).into_CFType()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_foundation::boolean::CFBoolean;

    #[test]
    fn test_dictionary_conversion() {
        let mut dict = Dictionary::new();
        dict.insert(
            "ServerAddresses".to_string(),
            StoreValue::Array(vec!["192.168.199.1".to_string()]),
        );
        dict.insert("DomainName".to_string(), StoreValue::from("example"));

        let cf = dictionary_to_cf(&dict);
        assert_eq!(cf.len(), 2);
        assert_eq!(dictionary_from_cf(&cf), dict);
    }

    #[test]
    fn test_unsupported_values_are_skipped() {
        let pairs = [
            (CFString::new("Flag"), CFBoolean::true_value().into_CFType()),
            (CFString::new("Name"), CFString::new("en0").into_CFType()),
        ];
        let cf = CFDictionary::from_CFType_pairs(&pairs).into_untyped();
        let dict = dictionary_from_cf(&cf);
        assert_eq!(dict.len(), 1);
        assert_eq!(dict.get("Name"), Some(&StoreValue::from("en0")));
    }
}
