//! Mapping between `caalookup_domain::RecordType` and `hickory_proto::rr::RecordType`
//!
//! hickory has no DNAME variant, so DNAME travels as the raw type code 39.

use caalookup_domain::RecordType;
use hickory_proto::rr::RecordType as HickoryRecordType;

pub struct RecordTypeMapper;

impl RecordTypeMapper {
    /// Convert domain RecordType → hickory RecordType (for building queries)
    pub fn to_hickory(record_type: &RecordType) -> HickoryRecordType {
        match record_type {
            RecordType::CNAME => HickoryRecordType::CNAME,
            RecordType::CAA => HickoryRecordType::CAA,
            RecordType::DNAME => HickoryRecordType::from(RecordType::DNAME.to_u16()),
        }
    }

    /// Convert hickory RecordType → domain RecordType
    ///
    /// Returns `None` for types the CAA walk never asks for.
    pub fn from_hickory(hickory_type: HickoryRecordType) -> Option<RecordType> {
        RecordType::from_u16(u16::from(hickory_type))
    }

    pub fn is_dname(hickory_type: HickoryRecordType) -> bool {
        u16::from(hickory_type) == RecordType::DNAME.to_u16()
    }
}
