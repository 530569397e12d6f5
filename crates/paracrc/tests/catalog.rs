//! Catalogue check values.
//!
//! Every predefined parametrization is checked against its published
//! `"123456789"` checksum, the default algorithm against narrower and wider
//! slice settings, and the random-access path against the single-pass
//! iterator path.

use paracrc::*;

const CHECK_INPUT: &[u8] = b"123456789";

macro_rules! check_values {
  ($($ty:ty => $expected:expr),* $(,)?) => {
    $(
      assert_eq!(<$ty>::compute(CHECK_INPUT), $expected, stringify!($ty));
    )*
  };
}

#[test]
fn catalogue_check_values() {
  check_values! {
    Crc1 => 0x1,
    Crc3Gsm => 0x4,
    Crc3Rohc => 0x6,
    Crc4G704 => 0x7,
    Crc4Interlaken => 0xB,
    Crc5EpcC1g2 => 0x00,
    Crc5G704 => 0x07,
    Crc5Usb => 0x19,
    Crc6Cdma2000A => 0x0D,
    Crc6Cdma2000B => 0x3B,
    Crc6Darc => 0x26,
    Crc6G704 => 0x06,
    Crc6Gsm => 0x13,
    Crc7Mmc => 0x75,
    Crc7Rohc => 0x53,
    Crc7Umts => 0x61,
    Crc8Autosar => 0xDF,
    Crc8Bluetooth => 0x26,
    Crc8Cdma2000 => 0xDA,
    Crc8Darc => 0x15,
    Crc8DvbS2 => 0xBC,
    Crc8GsmA => 0x37,
    Crc8GsmB => 0x94,
    Crc8Hitag => 0xB4,
    Crc8I432_1 => 0xA1,
    Crc8ICode => 0x7E,
    Crc8Lte => 0xEA,
    Crc8MaximDow => 0xA1,
    Crc8MifareMad => 0x99,
    Crc8Nrsc5 => 0xF7,
    Crc8Opensafety => 0x3E,
    Crc8Rohc => 0xD0,
    Crc8SaeJ1850 => 0x4B,
    Crc8Smbus => 0xF4,
    Crc8Tech3250 => 0x97,
    Crc8Wcdma => 0x25,
    Crc10Atm => 0x199,
    Crc10Cdma2000 => 0x233,
    Crc10Gsm => 0x12A,
    Crc11Flexray => 0x5A3,
    Crc11Umts => 0x061,
    Crc12Cdma2000 => 0xD4D,
    Crc12Dect => 0xF5B,
    Crc12Gsm => 0xB34,
    Crc12Umts => 0xDAF,
    Crc13Bbc => 0x04FA,
    Crc14Darc => 0x082D,
    Crc14Gsm => 0x30AE,
    Crc15Can => 0x059E,
    Crc15Mpt1327 => 0x2566,
    Crc16Arc => 0xBB3D,
    Crc16Cdma2000 => 0x4C06,
    Crc16Cms => 0xAEE7,
    Crc16Dds110 => 0x9ECF,
    Crc16DectR => 0x007E,
    Crc16DectX => 0x007F,
    Crc16Dnp => 0xEA82,
    Crc16En13757 => 0xC2B7,
    Crc16Genibus => 0xD64E,
    Crc16Gsm => 0xCE3C,
    Crc16Ibm3740 => 0x29B1,
    Crc16IbmSdlc => 0x906E,
    Crc16IsoIec14443_3A => 0xBF05,
    Crc16Kermit => 0x2189,
    Crc16Lj1200 => 0xBDF4,
    Crc16M17 => 0x772B,
    Crc16MaximDow => 0x44C2,
    Crc16Mcrf4xx => 0x6F91,
    Crc16Modbus => 0x4B37,
    Crc16Nrsc5 => 0xA066,
    Crc16OpensafetyA => 0x5D38,
    Crc16OpensafetyB => 0x20FE,
    Crc16Profibus => 0xA819,
    Crc16Riello => 0x63D0,
    Crc16SpiFujitsu => 0xE5CC,
    Crc16T10Dif => 0xD0DB,
    Crc16Teledisk => 0x0FB3,
    Crc16Tms37157 => 0x26B1,
    Crc16Umts => 0xFEE8,
    Crc16Usb => 0xB4C8,
    Crc16Xmodem => 0x31C3,
    Crc17CanFd => 0x04F03,
    Crc21CanFd => 0x0ED841,
    Crc24Ble => 0xC25A56,
    Crc24FlexrayA => 0x7979BD,
    Crc24FlexrayB => 0x1F23B8,
    Crc24Interlaken => 0xB4F3E6,
    Crc24LteA => 0xCDE703,
    Crc24LteB => 0x23EF52,
    Crc24OpenPgp => 0x21CF02,
    Crc24Os9 => 0x200FA5,
    Crc30Cdma => 0x04C34ABF,
    Crc31Philips => 0x0CE9E46C,
    Crc32Aixm => 0x3010BF7F,
    Crc32Autosar => 0x1697D06A,
    Crc32Base91D => 0x87315576,
    Crc32Bzip2 => 0xFC891918,
    Crc32CdRomEdc => 0x6EC2EDC4,
    Crc32Cksum => 0x765E7680,
    Crc32c => 0xE3069283,
    Crc32IsoHdlc => 0xCBF43926,
    Crc32Jamcrc => 0x340BC6D9,
    Crc32Mef => 0xD2C22F51,
    Crc32Mpeg2 => 0x0376E6E7,
    Crc32Xfer => 0xBD0BE338,
    Crc40Gsm => 0xD4164FC646,
    Crc64Ecma182 => 0x6C40DF5F0B497347,
    Crc64GoIso => 0xB90956C775A41001,
    Crc64Ms => 0x75D4B74F024ECEEA,
    Crc64Nvme => 0xAE8B14860A799888,
    Crc64Redis => 0xE9C6D914C4B8D9CA,
    Crc64We => 0x62EC59E3F1A4F00A,
    Crc64Xz => 0x995DC9BBDF1939FA,
  }
}

#[test]
fn common_name_aliases() {
  assert_eq!(Crc32::compute(CHECK_INPUT), 0xCBF43926);
  assert_eq!(Crc64::compute(CHECK_INPUT), 0x995DC9BBDF1939FA);
  assert_eq!(Crc16CcittFalse::compute(CHECK_INPUT), 0x29B1);
}

macro_rules! check_slice_widths {
  ($($ty:ty),* $(,)?) => {
    $(
      let expected = <$ty>::compute(CHECK_INPUT);
      assert_eq!(<$ty>::compute_with(SliceBy::<1>, CHECK_INPUT), expected, stringify!($ty));
      assert_eq!(<$ty>::compute_with(SliceBy::<2>, CHECK_INPUT), expected, stringify!($ty));
      assert_eq!(<$ty>::compute_with(SliceBy::<3>, CHECK_INPUT), expected, stringify!($ty));
      assert_eq!(<$ty>::compute_with(SliceBy::<4>, CHECK_INPUT), expected, stringify!($ty));
      assert_eq!(<$ty>::compute_with(SliceBy::<5>, CHECK_INPUT), expected, stringify!($ty));
      assert_eq!(<$ty>::compute_with(SliceBy::<13>, CHECK_INPUT), expected, stringify!($ty));
      assert_eq!(<$ty>::compute_with(SliceBy::<16>, CHECK_INPUT), expected, stringify!($ty));
      assert_eq!(
        <$ty>::new().process_iter(CHECK_INPUT.iter().copied()).finalize(),
        expected,
        stringify!($ty)
      );
    )*
  };
}

#[test]
fn slice_width_independence_across_widths() {
  // One representative per register width, both orientations where the
  // catalogue offers them. SliceBy<13> and SliceBy<16> exceed the input
  // length, so the whole message goes through the tail path.
  check_slice_widths! {
    Crc1,
    Crc3Gsm,
    Crc3Rohc,
    Crc4G704,
    Crc5Usb,
    Crc6Darc,
    Crc6Gsm,
    Crc7Mmc,
    Crc8Smbus,
    Crc8MaximDow,
    Crc10Atm,
    Crc11Flexray,
    Crc12Umts,
    Crc13Bbc,
    Crc14Darc,
    Crc15Can,
    Crc16Modbus,
    Crc16Xmodem,
    Crc17CanFd,
    Crc21CanFd,
    Crc24OpenPgp,
    Crc24Ble,
    Crc30Cdma,
    Crc31Philips,
    Crc32c,
    Crc32Bzip2,
    Crc40Gsm,
    Crc64Xz,
    Crc64Ecma182,
  }
}
