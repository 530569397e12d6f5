//! Predefined parametrizations.
//!
//! Aliases for the named CRCs from the
//! [Catalogue of Parametrised CRC Algorithms](https://reveng.sourceforge.io/crc-catalogue/all.htm)
//! and Koopman's polynomial zoo, parity through CRC-64. Each alias is purely
//! a type-level binding: naming one here costs nothing until it is used, at
//! which point its tables are materialized once and shared.
//!
//! CRC-82/DARC is omitted; its register does not fit any native unsigned
//! integer.

use crate::state::Crc;

// ─────────────────────────────────────────────────────────────────────────────
// Common names
// ─────────────────────────────────────────────────────────────────────────────

/// The everyday CRC-32 (ISO-HDLC): Ethernet, gzip, PNG, zip.
pub type Crc32 = Crc32IsoHdlc;

/// The everyday CRC-64 (XZ/ECMA polynomial, reflected).
pub type Crc64 = Crc64Xz;

/// Widely used alias for [`Crc16Ibm3740`].
pub type Crc16CcittFalse = Crc16Ibm3740;

// ─────────────────────────────────────────────────────────────────────────────
// Parity and tiny widths
// ─────────────────────────────────────────────────────────────────────────────

/// CRC-1: a single parity bit dressed up in the CRC model.
pub type Crc1 = Crc<1, 0x1, 0x0, false, false, 0x0>;

pub type Crc3Gsm = Crc<3, 0x3, 0x0, false, false, 0x7>;
pub type Crc3Rohc = Crc<3, 0x3, 0x7, true, true, 0x0>;
pub type Crc4G704 = Crc<4, 0x3, 0x0, true, true, 0x0>;
pub type Crc4Interlaken = Crc<4, 0x3, 0xF, false, false, 0xF>;
pub type Crc5EpcC1g2 = Crc<5, 0x09, 0x09, false, false, 0x00>;
pub type Crc5G704 = Crc<5, 0x15, 0x00, true, true, 0x00>;
/// CRC-5/USB, over token and start-of-frame packets.
pub type Crc5Usb = Crc<5, 0x05, 0x1F, true, true, 0x1F>;
pub type Crc6Cdma2000A = Crc<6, 0x27, 0x3F, false, false, 0x00>;
pub type Crc6Cdma2000B = Crc<6, 0x07, 0x3F, false, false, 0x00>;
pub type Crc6Darc = Crc<6, 0x19, 0x00, true, true, 0x00>;
pub type Crc6G704 = Crc<6, 0x03, 0x00, true, true, 0x00>;
pub type Crc6Gsm = Crc<6, 0x2F, 0x00, false, false, 0x3F>;
/// CRC-7/MMC, used by MMC/SD card commands.
pub type Crc7Mmc = Crc<7, 0x09, 0x00, false, false, 0x00>;
pub type Crc7Rohc = Crc<7, 0x4F, 0x7F, true, true, 0x00>;
pub type Crc7Umts = Crc<7, 0x45, 0x00, false, false, 0x00>;

// ─────────────────────────────────────────────────────────────────────────────
// CRC-8
// ─────────────────────────────────────────────────────────────────────────────

pub type Crc8Autosar = Crc<8, 0x2F, 0xFF, false, false, 0xFF>;
pub type Crc8Bluetooth = Crc<8, 0xA7, 0x00, true, true, 0x00>;
pub type Crc8Cdma2000 = Crc<8, 0x9B, 0xFF, false, false, 0x00>;
pub type Crc8Darc = Crc<8, 0x39, 0x00, true, true, 0x00>;
pub type Crc8DvbS2 = Crc<8, 0xD5, 0x00, false, false, 0x00>;
pub type Crc8GsmA = Crc<8, 0x1D, 0x00, false, false, 0x00>;
pub type Crc8GsmB = Crc<8, 0x49, 0x00, false, false, 0xFF>;
pub type Crc8Hitag = Crc<8, 0x1D, 0xFF, false, false, 0x00>;
pub type Crc8I432_1 = Crc<8, 0x07, 0x00, false, false, 0x55>;
pub type Crc8ICode = Crc<8, 0x1D, 0xFD, false, false, 0x00>;
pub type Crc8Lte = Crc<8, 0x9B, 0x00, false, false, 0x00>;
/// CRC-8/MAXIM-DOW: 1-Wire bus, iButton.
pub type Crc8MaximDow = Crc<8, 0x31, 0x00, true, true, 0x00>;
pub type Crc8MifareMad = Crc<8, 0x1D, 0xC7, false, false, 0x00>;
pub type Crc8Nrsc5 = Crc<8, 0x31, 0xFF, false, false, 0x00>;
pub type Crc8Opensafety = Crc<8, 0x2F, 0x00, false, false, 0x00>;
pub type Crc8Rohc = Crc<8, 0x07, 0xFF, true, true, 0x00>;
pub type Crc8SaeJ1850 = Crc<8, 0x1D, 0xFF, false, false, 0xFF>;
/// CRC-8/SMBUS, the plain polynomial-0x07 CRC-8.
pub type Crc8Smbus = Crc<8, 0x07, 0x00, false, false, 0x00>;
pub type Crc8Tech3250 = Crc<8, 0x1D, 0xFF, true, true, 0x00>;
pub type Crc8Wcdma = Crc<8, 0x9B, 0x00, true, true, 0x00>;

// ─────────────────────────────────────────────────────────────────────────────
// CRC-10 through CRC-15
// ─────────────────────────────────────────────────────────────────────────────

pub type Crc10Atm = Crc<10, 0x233, 0x000, false, false, 0x000>;
pub type Crc10Cdma2000 = Crc<10, 0x3D9, 0x3FF, false, false, 0x000>;
pub type Crc10Gsm = Crc<10, 0x175, 0x000, false, false, 0x3FF>;
pub type Crc11Flexray = Crc<11, 0x385, 0x01A, false, false, 0x000>;
pub type Crc11Umts = Crc<11, 0x307, 0x000, false, false, 0x000>;
pub type Crc12Cdma2000 = Crc<12, 0xF13, 0xFFF, false, false, 0x000>;
pub type Crc12Dect = Crc<12, 0x80F, 0x000, false, false, 0x000>;
pub type Crc12Gsm = Crc<12, 0xD31, 0x000, false, false, 0xFFF>;
/// CRC-12/UMTS is the odd one out: forward input, reflected output.
pub type Crc12Umts = Crc<12, 0x80F, 0x000, false, true, 0x000>;
pub type Crc13Bbc = Crc<13, 0x1CF5, 0x0000, false, false, 0x0000>;
pub type Crc14Darc = Crc<14, 0x0805, 0x0000, true, true, 0x0000>;
pub type Crc14Gsm = Crc<14, 0x202D, 0x0000, false, false, 0x3FFF>;
pub type Crc15Can = Crc<15, 0x4599, 0x0000, false, false, 0x0000>;
pub type Crc15Mpt1327 = Crc<15, 0x6815, 0x0000, false, false, 0x0001>;

// ─────────────────────────────────────────────────────────────────────────────
// CRC-16
// ─────────────────────────────────────────────────────────────────────────────

/// CRC-16/ARC, the classic reflected 0x8005 CRC (aka CRC-16/IBM).
pub type Crc16Arc = Crc<16, 0x8005, 0x0000, true, true, 0x0000>;
pub type Crc16Cdma2000 = Crc<16, 0xC867, 0xFFFF, false, false, 0x0000>;
pub type Crc16Cms = Crc<16, 0x8005, 0xFFFF, false, false, 0x0000>;
pub type Crc16Dds110 = Crc<16, 0x8005, 0x800D, false, false, 0x0000>;
pub type Crc16DectR = Crc<16, 0x0589, 0x0000, false, false, 0x0001>;
pub type Crc16DectX = Crc<16, 0x0589, 0x0000, false, false, 0x0000>;
pub type Crc16Dnp = Crc<16, 0x3D65, 0x0000, true, true, 0xFFFF>;
pub type Crc16En13757 = Crc<16, 0x3D65, 0x0000, false, false, 0xFFFF>;
pub type Crc16Genibus = Crc<16, 0x1021, 0xFFFF, false, false, 0xFFFF>;
pub type Crc16Gsm = Crc<16, 0x1021, 0x0000, false, false, 0xFFFF>;
/// CRC-16/IBM-3740, best known under its misnomer "CCITT-FALSE".
pub type Crc16Ibm3740 = Crc<16, 0x1021, 0xFFFF, false, false, 0x0000>;
/// CRC-16/IBM-SDLC: X.25, HDLC.
pub type Crc16IbmSdlc = Crc<16, 0x1021, 0xFFFF, true, true, 0xFFFF>;
pub type Crc16IsoIec14443_3A = Crc<16, 0x1021, 0xC6C6, true, true, 0x0000>;
/// CRC-16/KERMIT (aka CCITT-TRUE).
pub type Crc16Kermit = Crc<16, 0x1021, 0x0000, true, true, 0x0000>;
pub type Crc16Lj1200 = Crc<16, 0x6F63, 0x0000, false, false, 0x0000>;
pub type Crc16M17 = Crc<16, 0x5935, 0xFFFF, false, false, 0x0000>;
pub type Crc16MaximDow = Crc<16, 0x8005, 0x0000, true, true, 0xFFFF>;
pub type Crc16Mcrf4xx = Crc<16, 0x1021, 0xFFFF, true, true, 0x0000>;
/// CRC-16/MODBUS.
pub type Crc16Modbus = Crc<16, 0x8005, 0xFFFF, true, true, 0x0000>;
pub type Crc16Nrsc5 = Crc<16, 0x080B, 0xFFFF, true, true, 0x0000>;
pub type Crc16OpensafetyA = Crc<16, 0x5935, 0x0000, false, false, 0x0000>;
pub type Crc16OpensafetyB = Crc<16, 0x755B, 0x0000, false, false, 0x0000>;
pub type Crc16Profibus = Crc<16, 0x1DCF, 0xFFFF, false, false, 0xFFFF>;
pub type Crc16Riello = Crc<16, 0x1021, 0xB2AA, true, true, 0x0000>;
pub type Crc16SpiFujitsu = Crc<16, 0x1021, 0x1D0F, false, false, 0x0000>;
/// CRC-16/T10-DIF, SCSI data integrity field.
pub type Crc16T10Dif = Crc<16, 0x8BB7, 0x0000, false, false, 0x0000>;
pub type Crc16Teledisk = Crc<16, 0xA097, 0x0000, false, false, 0x0000>;
pub type Crc16Tms37157 = Crc<16, 0x1021, 0x89EC, true, true, 0x0000>;
pub type Crc16Umts = Crc<16, 0x8005, 0x0000, false, false, 0x0000>;
pub type Crc16Usb = Crc<16, 0x8005, 0xFFFF, true, true, 0xFFFF>;
/// CRC-16/XMODEM, the classic forward 0x1021 CRC.
pub type Crc16Xmodem = Crc<16, 0x1021, 0x0000, false, false, 0x0000>;

// ─────────────────────────────────────────────────────────────────────────────
// CRC-17 through CRC-31
// ─────────────────────────────────────────────────────────────────────────────

pub type Crc17CanFd = Crc<17, 0x1685B, 0x00000, false, false, 0x00000>;
pub type Crc21CanFd = Crc<21, 0x102899, 0x000000, false, false, 0x000000>;
/// CRC-24/BLE, Bluetooth Low Energy packet CRC.
pub type Crc24Ble = Crc<24, 0x00065B, 0x555555, true, true, 0x000000>;
pub type Crc24FlexrayA = Crc<24, 0x5D6DCB, 0xFEDCBA, false, false, 0x000000>;
pub type Crc24FlexrayB = Crc<24, 0x5D6DCB, 0xABCDEF, false, false, 0x000000>;
pub type Crc24Interlaken = Crc<24, 0x328B63, 0xFFFFFF, false, false, 0xFFFFFF>;
pub type Crc24LteA = Crc<24, 0x864CFB, 0x000000, false, false, 0x000000>;
pub type Crc24LteB = Crc<24, 0x800063, 0x000000, false, false, 0x000000>;
/// CRC-24/OPENPGP (RFC 4880 armor checksum).
pub type Crc24OpenPgp = Crc<24, 0x864CFB, 0xB704CE, false, false, 0x000000>;
pub type Crc24Os9 = Crc<24, 0x800063, 0xFFFFFF, false, false, 0xFFFFFF>;
pub type Crc30Cdma = Crc<30, 0x2030B9C7, 0x3FFFFFFF, false, false, 0x3FFFFFFF>;
pub type Crc31Philips = Crc<31, 0x04C11DB7, 0x7FFFFFFF, false, false, 0x7FFFFFFF>;

// ─────────────────────────────────────────────────────────────────────────────
// CRC-32
// ─────────────────────────────────────────────────────────────────────────────

pub type Crc32Aixm = Crc<32, 0x814141AB, 0x00000000, false, false, 0x00000000>;
pub type Crc32Autosar = Crc<32, 0xF4ACFB13, 0xFFFFFFFF, true, true, 0xFFFFFFFF>;
pub type Crc32Base91D = Crc<32, 0xA833982B, 0xFFFFFFFF, true, true, 0xFFFFFFFF>;
/// The forward 0x04C11DB7 variant used by bzip2 and AAL5.
pub type Crc32Bzip2 = Crc<32, 0x04C11DB7, 0xFFFFFFFF, false, false, 0xFFFFFFFF>;
pub type Crc32CdRomEdc = Crc<32, 0x8001801B, 0x00000000, true, true, 0x00000000>;
/// CRC-32/CKSUM, the POSIX `cksum` utility.
pub type Crc32Cksum = Crc<32, 0x04C11DB7, 0x00000000, false, false, 0xFFFFFFFF>;
/// CRC-32C (Castagnoli): iSCSI, SCTP, Btrfs, ext4.
pub type Crc32c = Crc<32, 0x1EDC6F41, 0xFFFFFFFF, true, true, 0xFFFFFFFF>;
/// CRC-32/ISO-HDLC: Ethernet, gzip, PNG, zip.
pub type Crc32IsoHdlc = Crc<32, 0x04C11DB7, 0xFFFFFFFF, true, true, 0xFFFFFFFF>;
pub type Crc32Jamcrc = Crc<32, 0x04C11DB7, 0xFFFFFFFF, true, true, 0x00000000>;
pub type Crc32Mef = Crc<32, 0x741B8CD7, 0xFFFFFFFF, true, true, 0x00000000>;
/// CRC-32/MPEG-2.
pub type Crc32Mpeg2 = Crc<32, 0x04C11DB7, 0xFFFFFFFF, false, false, 0x00000000>;
pub type Crc32Xfer = Crc<32, 0x000000AF, 0x00000000, false, false, 0x00000000>;

// ─────────────────────────────────────────────────────────────────────────────
// CRC-40 and CRC-64
// ─────────────────────────────────────────────────────────────────────────────

pub type Crc40Gsm = Crc<40, 0x0004820009, 0x0000000000, false, false, 0xFFFFFFFFFF>;
pub type Crc64Ecma182 = Crc<64, 0x42F0E1EBA9EA3693, 0x0000000000000000, false, false, 0x0000000000000000>;
pub type Crc64GoIso = Crc<64, 0x000000000000001B, 0xFFFFFFFFFFFFFFFF, true, true, 0xFFFFFFFFFFFFFFFF>;
pub type Crc64Ms = Crc<64, 0x259C84CBA6426349, 0xFFFFFFFFFFFFFFFF, true, true, 0x0000000000000000>;
/// CRC-64/NVME, from the NVMe specification.
pub type Crc64Nvme = Crc<64, 0xAD93D23594C93659, 0xFFFFFFFFFFFFFFFF, true, true, 0xFFFFFFFFFFFFFFFF>;
pub type Crc64Redis = Crc<64, 0xAD93D23594C935A9, 0x0000000000000000, true, true, 0x0000000000000000>;
pub type Crc64We = Crc<64, 0x42F0E1EBA9EA3693, 0xFFFFFFFFFFFFFFFF, false, false, 0xFFFFFFFFFFFFFFFF>;
/// CRC-64/XZ: XZ Utils, 7-Zip.
pub type Crc64Xz = Crc<64, 0x42F0E1EBA9EA3693, 0xFFFFFFFFFFFFFFFF, true, true, 0xFFFFFFFFFFFFFFFF>;
