//! Data element tag declarations
//!
//! The attributes declared here are those which DICOM-lite
//! knows how to interpret in the absence of an explicit VR:
//! the file meta group, the usual patient, study, series and
//! instance identification attributes, and the image pixel module.
//! Tags outside this set are still parsed, as opaque `UN` elements.
//!
//! The contents are sorted by tag.
#![allow(missing_docs)]

use dicom_lite_core::dictionary::DataDictionaryEntryRef as E;
use dicom_lite_core::Tag;
use dicom_lite_core::VR::*;

/// FileMetaInformationGroupLength (0002,0000) UL
pub const FILE_META_INFORMATION_GROUP_LENGTH: Tag = Tag(0x0002, 0x0000);
/// FileMetaInformationVersion (0002,0001) OB
pub const FILE_META_INFORMATION_VERSION: Tag = Tag(0x0002, 0x0001);
/// MediaStorageSOPClassUID (0002,0002) UI
pub const MEDIA_STORAGE_SOP_CLASS_UID: Tag = Tag(0x0002, 0x0002);
/// MediaStorageSOPInstanceUID (0002,0003) UI
pub const MEDIA_STORAGE_SOP_INSTANCE_UID: Tag = Tag(0x0002, 0x0003);
/// TransferSyntaxUID (0002,0010) UI
pub const TRANSFER_SYNTAX_UID: Tag = Tag(0x0002, 0x0010);
/// ImplementationClassUID (0002,0012) UI
pub const IMPLEMENTATION_CLASS_UID: Tag = Tag(0x0002, 0x0012);
/// ImplementationVersionName (0002,0013) SH
pub const IMPLEMENTATION_VERSION_NAME: Tag = Tag(0x0002, 0x0013);
/// SourceApplicationEntityTitle (0002,0016) AE
pub const SOURCE_APPLICATION_ENTITY_TITLE: Tag = Tag(0x0002, 0x0016);
/// SpecificCharacterSet (0008,0005) CS
pub const SPECIFIC_CHARACTER_SET: Tag = Tag(0x0008, 0x0005);
/// ImageType (0008,0008) CS
pub const IMAGE_TYPE: Tag = Tag(0x0008, 0x0008);
/// SOPClassUID (0008,0016) UI
pub const SOP_CLASS_UID: Tag = Tag(0x0008, 0x0016);
/// SOPInstanceUID (0008,0018) UI
pub const SOP_INSTANCE_UID: Tag = Tag(0x0008, 0x0018);
/// StudyDate (0008,0020) DA
pub const STUDY_DATE: Tag = Tag(0x0008, 0x0020);
/// SeriesDate (0008,0021) DA
pub const SERIES_DATE: Tag = Tag(0x0008, 0x0021);
/// ContentDate (0008,0023) DA
pub const CONTENT_DATE: Tag = Tag(0x0008, 0x0023);
/// StudyTime (0008,0030) TM
pub const STUDY_TIME: Tag = Tag(0x0008, 0x0030);
/// SeriesTime (0008,0031) TM
pub const SERIES_TIME: Tag = Tag(0x0008, 0x0031);
/// ContentTime (0008,0033) TM
pub const CONTENT_TIME: Tag = Tag(0x0008, 0x0033);
/// AccessionNumber (0008,0050) SH
pub const ACCESSION_NUMBER: Tag = Tag(0x0008, 0x0050);
/// Modality (0008,0060) CS
pub const MODALITY: Tag = Tag(0x0008, 0x0060);
/// Manufacturer (0008,0070) LO
pub const MANUFACTURER: Tag = Tag(0x0008, 0x0070);
/// InstitutionName (0008,0080) LO
pub const INSTITUTION_NAME: Tag = Tag(0x0008, 0x0080);
/// ReferringPhysicianName (0008,0090) PN
pub const REFERRING_PHYSICIAN_NAME: Tag = Tag(0x0008, 0x0090);
/// StationName (0008,1010) SH
pub const STATION_NAME: Tag = Tag(0x0008, 0x1010);
/// StudyDescription (0008,1030) LO
pub const STUDY_DESCRIPTION: Tag = Tag(0x0008, 0x1030);
/// SeriesDescription (0008,103E) LO
pub const SERIES_DESCRIPTION: Tag = Tag(0x0008, 0x103E);
/// OperatorsName (0008,1070) PN
pub const OPERATORS_NAME: Tag = Tag(0x0008, 0x1070);
/// ManufacturerModelName (0008,1090) LO
pub const MANUFACTURER_MODEL_NAME: Tag = Tag(0x0008, 0x1090);
/// PatientName (0010,0010) PN
pub const PATIENT_NAME: Tag = Tag(0x0010, 0x0010);
/// PatientID (0010,0020) LO
pub const PATIENT_ID: Tag = Tag(0x0010, 0x0020);
/// PatientBirthDate (0010,0030) DA
pub const PATIENT_BIRTH_DATE: Tag = Tag(0x0010, 0x0030);
/// PatientSex (0010,0040) CS
pub const PATIENT_SEX: Tag = Tag(0x0010, 0x0040);
/// PatientAge (0010,1010) AS
pub const PATIENT_AGE: Tag = Tag(0x0010, 0x1010);
/// PatientSize (0010,1020) DS
pub const PATIENT_SIZE: Tag = Tag(0x0010, 0x1020);
/// PatientWeight (0010,1030) DS
pub const PATIENT_WEIGHT: Tag = Tag(0x0010, 0x1030);
/// BodyPartExamined (0018,0015) CS
pub const BODY_PART_EXAMINED: Tag = Tag(0x0018, 0x0015);
/// SliceThickness (0018,0050) DS
pub const SLICE_THICKNESS: Tag = Tag(0x0018, 0x0050);
/// StudyInstanceUID (0020,000D) UI
pub const STUDY_INSTANCE_UID: Tag = Tag(0x0020, 0x000D);
/// SeriesInstanceUID (0020,000E) UI
pub const SERIES_INSTANCE_UID: Tag = Tag(0x0020, 0x000E);
/// StudyID (0020,0010) SH
pub const STUDY_ID: Tag = Tag(0x0020, 0x0010);
/// SeriesNumber (0020,0011) IS
pub const SERIES_NUMBER: Tag = Tag(0x0020, 0x0011);
/// InstanceNumber (0020,0013) IS
pub const INSTANCE_NUMBER: Tag = Tag(0x0020, 0x0013);
/// SamplesPerPixel (0028,0002) US
pub const SAMPLES_PER_PIXEL: Tag = Tag(0x0028, 0x0002);
/// PhotometricInterpretation (0028,0004) CS
pub const PHOTOMETRIC_INTERPRETATION: Tag = Tag(0x0028, 0x0004);
/// NumberOfFrames (0028,0008) IS
pub const NUMBER_OF_FRAMES: Tag = Tag(0x0028, 0x0008);
/// Rows (0028,0010) US
pub const ROWS: Tag = Tag(0x0028, 0x0010);
/// Columns (0028,0011) US
pub const COLUMNS: Tag = Tag(0x0028, 0x0011);
/// PixelSpacing (0028,0030) DS
pub const PIXEL_SPACING: Tag = Tag(0x0028, 0x0030);
/// BitsAllocated (0028,0100) US
pub const BITS_ALLOCATED: Tag = Tag(0x0028, 0x0100);
/// BitsStored (0028,0101) US
pub const BITS_STORED: Tag = Tag(0x0028, 0x0101);
/// HighBit (0028,0102) US
pub const HIGH_BIT: Tag = Tag(0x0028, 0x0102);
/// PixelRepresentation (0028,0103) US
pub const PIXEL_REPRESENTATION: Tag = Tag(0x0028, 0x0103);
/// WindowCenter (0028,1050) DS
pub const WINDOW_CENTER: Tag = Tag(0x0028, 0x1050);
/// WindowWidth (0028,1051) DS
pub const WINDOW_WIDTH: Tag = Tag(0x0028, 0x1051);
/// RescaleIntercept (0028,1052) DS
pub const RESCALE_INTERCEPT: Tag = Tag(0x0028, 0x1052);
/// RescaleSlope (0028,1053) DS
pub const RESCALE_SLOPE: Tag = Tag(0x0028, 0x1053);
/// PixelData (7FE0,0010) OW
pub const PIXEL_DATA: Tag = Tag(0x7FE0, 0x0010);

#[rustfmt::skip]
pub(crate) const ENTRIES: &[E<'static>] = &[
    E { tag: FILE_META_INFORMATION_GROUP_LENGTH, alias: "FileMetaInformationGroupLength", vr: UL },
    E { tag: FILE_META_INFORMATION_VERSION, alias: "FileMetaInformationVersion", vr: OB },
    E { tag: MEDIA_STORAGE_SOP_CLASS_UID, alias: "MediaStorageSOPClassUID", vr: UI },
    E { tag: MEDIA_STORAGE_SOP_INSTANCE_UID, alias: "MediaStorageSOPInstanceUID", vr: UI },
    E { tag: TRANSFER_SYNTAX_UID, alias: "TransferSyntaxUID", vr: UI },
    E { tag: IMPLEMENTATION_CLASS_UID, alias: "ImplementationClassUID", vr: UI },
    E { tag: IMPLEMENTATION_VERSION_NAME, alias: "ImplementationVersionName", vr: SH },
    E { tag: SOURCE_APPLICATION_ENTITY_TITLE, alias: "SourceApplicationEntityTitle", vr: AE },
    E { tag: SPECIFIC_CHARACTER_SET, alias: "SpecificCharacterSet", vr: CS },
    E { tag: IMAGE_TYPE, alias: "ImageType", vr: CS },
    E { tag: SOP_CLASS_UID, alias: "SOPClassUID", vr: UI },
    E { tag: SOP_INSTANCE_UID, alias: "SOPInstanceUID", vr: UI },
    E { tag: STUDY_DATE, alias: "StudyDate", vr: DA },
    E { tag: SERIES_DATE, alias: "SeriesDate", vr: DA },
    E { tag: CONTENT_DATE, alias: "ContentDate", vr: DA },
    E { tag: STUDY_TIME, alias: "StudyTime", vr: TM },
    E { tag: SERIES_TIME, alias: "SeriesTime", vr: TM },
    E { tag: CONTENT_TIME, alias: "ContentTime", vr: TM },
    E { tag: ACCESSION_NUMBER, alias: "AccessionNumber", vr: SH },
    E { tag: MODALITY, alias: "Modality", vr: CS },
    E { tag: MANUFACTURER, alias: "Manufacturer", vr: LO },
    E { tag: INSTITUTION_NAME, alias: "InstitutionName", vr: LO },
    E { tag: REFERRING_PHYSICIAN_NAME, alias: "ReferringPhysicianName", vr: PN },
    E { tag: STATION_NAME, alias: "StationName", vr: SH },
    E { tag: STUDY_DESCRIPTION, alias: "StudyDescription", vr: LO },
    E { tag: SERIES_DESCRIPTION, alias: "SeriesDescription", vr: LO },
    E { tag: OPERATORS_NAME, alias: "OperatorsName", vr: PN },
    E { tag: MANUFACTURER_MODEL_NAME, alias: "ManufacturerModelName", vr: LO },
    E { tag: PATIENT_NAME, alias: "PatientName", vr: PN },
    E { tag: PATIENT_ID, alias: "PatientID", vr: LO },
    E { tag: PATIENT_BIRTH_DATE, alias: "PatientBirthDate", vr: DA },
    E { tag: PATIENT_SEX, alias: "PatientSex", vr: CS },
    E { tag: PATIENT_AGE, alias: "PatientAge", vr: AS },
    E { tag: PATIENT_SIZE, alias: "PatientSize", vr: DS },
    E { tag: PATIENT_WEIGHT, alias: "PatientWeight", vr: DS },
    E { tag: BODY_PART_EXAMINED, alias: "BodyPartExamined", vr: CS },
    E { tag: SLICE_THICKNESS, alias: "SliceThickness", vr: DS },
    E { tag: STUDY_INSTANCE_UID, alias: "StudyInstanceUID", vr: UI },
    E { tag: SERIES_INSTANCE_UID, alias: "SeriesInstanceUID", vr: UI },
    E { tag: STUDY_ID, alias: "StudyID", vr: SH },
    E { tag: SERIES_NUMBER, alias: "SeriesNumber", vr: IS },
    E { tag: INSTANCE_NUMBER, alias: "InstanceNumber", vr: IS },
    E { tag: SAMPLES_PER_PIXEL, alias: "SamplesPerPixel", vr: US },
    E { tag: PHOTOMETRIC_INTERPRETATION, alias: "PhotometricInterpretation", vr: CS },
    E { tag: NUMBER_OF_FRAMES, alias: "NumberOfFrames", vr: IS },
    E { tag: ROWS, alias: "Rows", vr: US },
    E { tag: COLUMNS, alias: "Columns", vr: US },
    E { tag: PIXEL_SPACING, alias: "PixelSpacing", vr: DS },
    E { tag: BITS_ALLOCATED, alias: "BitsAllocated", vr: US },
    E { tag: BITS_STORED, alias: "BitsStored", vr: US },
    E { tag: HIGH_BIT, alias: "HighBit", vr: US },
    E { tag: PIXEL_REPRESENTATION, alias: "PixelRepresentation", vr: US },
    E { tag: WINDOW_CENTER, alias: "WindowCenter", vr: DS },
    E { tag: WINDOW_WIDTH, alias: "WindowWidth", vr: DS },
    E { tag: RESCALE_INTERCEPT, alias: "RescaleIntercept", vr: DS },
    E { tag: RESCALE_SLOPE, alias: "RescaleSlope", vr: DS },
    E { tag: PIXEL_DATA, alias: "PixelData", vr: OW },
];
