use std::collections::HashMap;

use macros::named_list_chunk;

use crate::{
    gamemaker::{
        deserialize::reader::DataReader,
        elements::{GMElement, element_stub, function::GMFunction, variable::GMVariable},
        reference::GMRef,
    },
    gml::{
        instruction::{
            AssetReference, CodeVariable, ComparisonType, DataType, InstanceType, Instruction,
            PushValue, VariableType,
        },
        opcodes,
    },
    prelude::*,
    util::init::{num_enum_from, vec_with_capacity},
};

#[named_list_chunk("CODE")]
pub struct GMCodes {
    pub codes: Vec<GMCode>,
    pub exists: bool,
}

/// A code entry in a data file: a name and its decoded instruction stream.
#[derive(Debug, Clone, PartialEq)]
pub struct GMCode {
    pub name: String,

    /// The decoded bytecode instructions of this entry.
    pub instructions: Vec<Instruction>,

    /// Set for `bytecode_version >= 15`.
    pub modern_data: Option<ModernData>,

    /// Length in bytes of this entry's own instruction stream, independent of whether those
    /// bytes are owned by this entry or borrowed from a parent's shared blob. See
    /// [`GMCodes::code_entry_byte_range`].
    instruction_byte_length: u32,
}
element_stub!(GMCode);

/// Bytecode-15+-only metadata for a [`GMCode`] entry.
#[derive(Debug, Clone, PartialEq)]
pub struct ModernData {
    pub locals_count: u16,
    pub arguments_count: u16,

    /// Set on certain code entries which usually don't have locals attached to them.
    pub weird_local_flag: bool,

    /// Byte offset within the shared blob this entry's bytecode begins executing from.
    /// 0 for root (parent) entries, nonzero for child entries.
    pub offset: u32,

    /// The parent entry that owns the shared bytecode blob, if this is a child entry.
    pub parent: Option<GMRef<GMCode>>,
}

impl GMElement for GMCodes {
    fn deserialize(reader: &mut DataReader) -> Result<Self> {
        // This can happen with YYC/
        if reader.chunk.is_empty() {
            return Ok(Self { codes: vec![], exists: false });
        }

        let pointers: Vec<u32> = reader.read_simple_list()?;
        let count: usize = pointers.len();

        let Some(&first_pos) = pointers.first() else {
            return Ok(Self { codes: vec![], exists: true });
        };
        reader.cur_pos = first_pos;

        let mut codes: Vec<GMCode> = vec_with_capacity(count as u32)?;
        let mut instructions_ranges: Vec<(u32, u32)> = Vec::with_capacity(count);
        let mut codes_by_pos: HashMap<u32, GMRef<GMCode>> = HashMap::new();
        let mut last_code_entry_pos = reader.cur_pos;

        for pointer in pointers {
            reader.assert_pos(pointer, "Code")?;
            let name: String = reader.read_gm_string()?;
            let code_length = reader.read_u32()?;

            let instructions_start_pos;
            let instructions_end_pos;
            let modern_data: Option<ModernData>;

            if reader.general_info.bytecode_version <= 14 {
                instructions_start_pos = reader.cur_pos; // Instructions are placed immediately after code metadata; how convenient!
                reader.cur_pos += code_length; // Skip over them; they will get parsed in the next loops
                instructions_end_pos = reader.cur_pos;
                modern_data = None;
            } else {
                let locals_count = reader.read_u16()?;
                let arguments_count_raw = reader.read_u16()?;
                let arguments_count: u16 = arguments_count_raw & 0x7FFF;
                let weird_local_flag: bool = arguments_count_raw & 0x8000 != 0;

                let position = reader.cur_pos;
                let instructions_start_offset = reader.read_i32()?;
                instructions_start_pos = position
                    .checked_add_signed(instructions_start_offset)
                    .ok_or("Instruction start position overflowed")?;

                let offset = reader.read_u32()?;

                instructions_end_pos = instructions_start_pos
                    .checked_add(code_length)
                    .ok_or("Instruction end position overflowed")?;

                let data = ModernData {
                    locals_count,
                    arguments_count,
                    weird_local_flag,
                    offset,
                    parent: None,
                };
                modern_data = Some(data);
            }

            let instruction_byte_length = instructions_end_pos - instructions_start_pos;
            codes.push(GMCode {
                name,
                instructions: vec![],
                modern_data,
                instruction_byte_length,
            });

            instructions_ranges.push((instructions_start_pos, instructions_end_pos));
            last_code_entry_pos = reader.cur_pos;
        }

        for (i, (start, end)) in instructions_ranges.into_iter().enumerate() {
            let code: &mut GMCode = &mut codes[i];
            let length = end - start;

            // If WAD15+ and the instructions pointer is known, then it's a child code entry
            if length > 0
                && let Some(parent_code) = codes_by_pos.get(&start)
                && let Some(data) = &mut code.modern_data
            {
                data.parent = Some(*parent_code);
                continue;
            }

            reader.cur_pos = start;
            // Estimated Size: https://discord.com/channels/566861759210586112/568625491876118528/1424403240258371615
            code.instructions = vec_with_capacity(length / 5)?;

            if length > 0 {
                // Update information to mark this entry as the root (if we have at least 1 instruction)
                codes_by_pos.insert(start, i.into());
            }

            while reader.cur_pos < end {
                let instruction = Instruction::deserialize(reader)
                    .with_context(|| {
                        format!(
                            "parsing Instruction #{} at position {}",
                            code.instructions.len(),
                            reader.cur_pos,
                        )
                    })
                    .with_context(|| {
                        format!("parsing Code entry {:?} at position {}", code.name, start)
                    })?;
                code.instructions.push(instruction);
            }
        }

        reader.cur_pos = last_code_entry_pos;
        // Set pos to the supposed chunk end (since instructions are stored separately in WAD15+)

        Ok(Self { codes, exists: true })
    }

}

impl GMCodes {
    /// Returns `entry`'s `(offset, length)` within its bytecode blob.
    ///
    /// For a root entry (or any entry under `bytecode_version <= 14`, which has no shared-blob
    /// concept at all), `offset` is `0` and `length` spans the entry's own instruction bytes.
    /// For a child entry sharing a parent's blob (GMS2.3+), `offset` is the byte position within
    /// that blob where this entry's instructions begin, and `length` is this entry's own slice
    /// of it, not the whole parent blob.
    pub fn code_entry_byte_range(&self, entry: &GMCode) -> (u32, u32) {
        let offset = entry.modern_data.as_ref().map_or(0, |data| data.offset);
        (offset, entry.instruction_byte_length)
    }
}

impl GMElement for Instruction {
    fn deserialize(reader: &mut DataReader) -> Result<Self> {
        let word = reader.read_u32()?;
        let mut opcode = ((word & 0xFF00_0000) >> 24) as u8;
        let b2 = ((word & 0x00FF_0000) >> 16) as u8;
        let b1 = ((word & 0x0000_FF00) >> 8) as u8;
        let b0 = (word & 0x0000_00FF) as u8;
        let mut b = [b0, b1, b2];

        if reader.general_info.bytecode_version < 15 {
            if matches!(opcode, 0x10..=0x16) {
                // This is needed to preserve the comparison type for pre WAD 15
                reader.assert_zero_b1(b)?;
                b[1] = opcode - 0x10;
            }
            opcode = opcodes::old_to_new(opcode);
        }

        // log::debug!("{} // {:02X} {:02X} {:02X} {:02X}", reader.cur_pos-4, b[0], b[1], b[2], opcode);

        Ok(match opcode {
            opcodes::CONV => {
                let types = reader
                    .parse_double_type(b)
                    .context("parsing Convert Instruction")?;
                Self::Convert { from: types[0], to: types[1] }
            },
            opcodes::MUL => {
                let types = reader
                    .parse_double_type(b)
                    .context("parsing Multiply Instruction")?;
                Self::Multiply {
                    multiplicand: types[1],
                    multiplier: types[0],
                }
            },
            opcodes::DIV => {
                let types = reader
                    .parse_double_type(b)
                    .context("parsing Divide Instruction")?;
                Self::Divide { dividend: types[1], divisor: types[0] }
            },
            opcodes::REM => {
                let types = reader
                    .parse_double_type(b)
                    .context("parsing Remainder Instruction")?;
                Self::Remainder { dividend: types[1], divisor: types[0] }
            },
            opcodes::MOD => {
                let types = reader
                    .parse_double_type(b)
                    .context("parsing Modulus Instruction")?;
                Self::Modulus { dividend: types[1], divisor: types[0] }
            },
            opcodes::ADD => {
                let types = reader
                    .parse_double_type(b)
                    .context("parsing Add Instruction")?;
                Self::Add { augend: types[1], addend: types[0] }
            },
            opcodes::SUB => {
                let types = reader
                    .parse_double_type(b)
                    .context("parsing Subtract Instruction")?;
                Self::Subtract { minuend: types[1], subtrahend: types[0] }
            },
            opcodes::AND => {
                let types = reader
                    .parse_double_type(b)
                    .context("parsing And Instruction")?;
                Self::And { lhs: types[1], rhs: types[0] }
            },
            opcodes::OR => {
                let types = reader
                    .parse_double_type(b)
                    .context("parsing Or Instruction")?;
                Self::Or { lhs: types[1], rhs: types[0] }
            },
            opcodes::XOR => {
                let types = reader
                    .parse_double_type(b)
                    .context("parsing Xor Instruction")?;
                Self::Xor { lhs: types[1], rhs: types[0] }
            },
            opcodes::NEG => {
                let data_type = reader
                    .parse_single_type(b)
                    .context("parsing Negate Instruction")?;
                Self::Negate { data_type }
            },
            opcodes::NOT => {
                let data_type = reader
                    .parse_single_type(b)
                    .context("parsing Not Instruction")?;
                Self::Not { data_type }
            },
            opcodes::SHL => {
                let types = reader
                    .parse_double_type(b)
                    .context("parsing ShiftLeft instruction")?;
                Self::ShiftLeft { value: types[1], shift_amount: types[0] }
            },
            opcodes::SHR => {
                let types = reader
                    .parse_double_type(b)
                    .context("parsing ShiftRight Instruction")?;
                Self::ShiftRight { value: types[1], shift_amount: types[0] }
            },
            opcodes::CMP => reader
                .parse_comparison(b)
                .context("parsing Comparison Instruction")?,
            opcodes::POP => reader.parse_pop(b).context("parsing Pop Instruction")?,
            opcodes::DUP => reader
                .parse_duplicate(b)
                .context("parsing Duplicate Instruction")?,
            opcodes::RET => {
                let ctx = "parsing Return Instruction";
                let data_type = reader.parse_single_type(b).context(ctx)?;
                reader
                    .assert_type(DataType::Variable, data_type)
                    .context(ctx)?;
                Self::Return
            },
            opcodes::EXIT => {
                let ctx = "parsing Exit Instruction";
                let data_type = reader.parse_single_type(b).context(ctx)?;
                reader
                    .assert_type(DataType::Int32, data_type)
                    .context(ctx)?;
                Self::Exit
            },
            opcodes::POPZ => {
                let data_type = reader
                    .parse_single_type(b)
                    .context("parsing PopDiscard Instruction")?;
                Self::PopDiscard { data_type }
            },
            opcodes::JMP => Self::Branch { jump_offset: reader.parse_branch(b) },
            opcodes::JT => Self::BranchIf { jump_offset: reader.parse_branch(b) },
            opcodes::JF => Self::BranchUnless { jump_offset: reader.parse_branch(b) },
            opcodes::PUSHENV => Self::PushWithContext { jump_offset: reader.parse_branch(b) },
            opcodes::POPENV if b == [0x00, 0x00, 0xF0] => Self::PopWithContextExit,
            opcodes::POPENV => Self::PopWithContext { jump_offset: reader.parse_branch(b) },
            opcodes::PUSH => {
                let value = reader.parse_push(b).context("parsing Push Instruction")?;
                Self::Push { value }
            },
            opcodes::PUSHLOC => {
                let variable = reader
                    .parse_push_var(b)
                    .context("parsing PushLocal Instruction")?;
                Self::PushLocal { variable }
            },
            opcodes::PUSHGLB => {
                let variable = reader
                    .parse_push_var(b)
                    .context("parsing PushGlobal Instruction")?;
                Self::PushGlobal { variable }
            },
            opcodes::PUSHBLTN => {
                let variable = reader
                    .parse_push_var(b)
                    .context("parsing PushBuiltin Instruction")?;
                Self::PushBuiltin { variable }
            },
            opcodes::PUSHIM => {
                let integer = reader
                    .parse_pushim(b)
                    .context("parsing PushImmediate Instruction")?;
                Self::PushImmediate { integer }
            },
            opcodes::CALL => reader.parse_call(b).context("parsing Call Instruction")?,
            opcodes::CALLVAR => {
                let argument_count = reader
                    .parse_callvar(b)
                    .context("parsing CallVariable Instruction")?;
                Self::CallVariable { argument_count }
            },
            opcodes::EXTENDED => reader
                .parse_extended(b)
                .context("parsing Extended Instruction")?,
            _ => {
                log::warn!("Unrecognized Instruction Opcode {opcode} (0x{opcode:02X}) at position {}", reader.cur_pos - 4);
                Self::Unknown { raw: opcode }
            },
        })
    }

}

fn get_type1(b: [u8; 3]) -> Result<DataType> {
    num_enum_from(b[2] & 0xF)
}

fn get_type2(b: [u8; 3]) -> Result<DataType> {
    num_enum_from(b[2] >> 4)
}

/// This will not work for big endian (probably)
fn get_u24(b: [u8; 3]) -> u32 {
    let b0 = u32::from(b[0]);
    let b1 = u32::from(b[1]);
    let b2 = u32::from(b[2]);
    b0 | (b1 << 8) | (b2 << 16)
}

/// This will not work for big endian (probably)
fn get_u16(b: [u8; 3]) -> u16 {
    let b0 = u16::from(b[0]);
    let b1 = u16::from(b[1]);
    b0 | (b1 << 8)
}

impl DataReader<'_> {
    fn assert_type(&self, actual: DataType, expected: DataType) -> Result<()> {
        self.assert_data_type(actual, expected, "Instruction")
    }

    fn assert_zero_b0(&self, b: [u8; 3]) -> Result<()> {
        self.assert_int(b[0], 0, "Instruction byte #0")
    }

    fn assert_zero_b1(&self, b: [u8; 3]) -> Result<()> {
        self.assert_int(b[1], 0, "Instruction byte #1")
    }

    fn assert_zero_type2(&self, b: [u8; 3]) -> Result<()> {
        self.assert_int(b[2] >> 4, 0, "Instruction data type 2 (in byte #2)")
    }

    fn parse_single_type(&self, b: [u8; 3]) -> Result<DataType> {
        self.assert_zero_b0(b)?;
        self.assert_zero_b1(b)?;
        let data_type = get_type1(b)?;
        self.assert_zero_type2(b)?;
        Ok(data_type)
    }

    fn parse_double_type(&self, b: [u8; 3]) -> Result<[DataType; 2]> {
        self.assert_zero_b0(b)?;
        self.assert_zero_b1(b)?;
        let right = get_type1(b)?;
        let left = get_type2(b)?;
        Ok([right, left])
    }

    fn parse_comparison(&self, b: [u8; 3]) -> Result<Instruction> {
        self.assert_zero_b0(b)?;
        let comparison_type: ComparisonType = num_enum_from(b[1])?;
        let rhs = get_type1(b)?;
        let lhs = get_type2(b)?;
        Ok(Instruction::Compare { lhs, rhs, comparison_type })
    }

    fn parse_pop(&mut self, b: [u8; 3]) -> Result<Instruction> {
        let raw_instance_type = get_u16(b) as i16;
        let type1: DataType = get_type1(b)?;
        let type2: DataType = get_type2(b)?;

        if type1 == DataType::Int16 {
            // PopSwap instruction
            self.assert_type(DataType::Variable, type2)?;

            let is_array = match raw_instance_type {
                5 => false,
                6 => true,
                n => bail!(
                    "Expected 5 or 6 for \"instance type\" (aka SwapExtra) of PopSwap Instruction, got {n}"
                ),
            };
            return Ok(Instruction::PopSwap { is_array });
        }

        let variable: CodeVariable = read_variable(self, raw_instance_type)?;
        Ok(Instruction::Pop { variable, type1, type2 })
    }

    fn parse_duplicate(&self, b: [u8; 3]) -> Result<Instruction> {
        let size: u8 = b[0];
        let mut size2: u8 = b[1];
        let data_type = get_type1(b)?;
        self.assert_zero_type2(b)?;

        if size2 == 0 {
            return Ok(Instruction::Duplicate { data_type, size });
        }

        // Duplicate Swap Instruction
        size2 = (size2 & 0x7F) >> 3;
        Ok(Instruction::DuplicateSwap { data_type, size1: size, size2 })
    }

    fn parse_branch(&self, b: [u8; 3]) -> i32 {
        let mut value: u32 = get_u24(b);
        if self.general_info.bytecode_version > 14 && (value & 0x40_0000) != 0 {
            value |= 0x80_0000;
        }
        if value & 0x80_0000 != 0 {
            (value | 0xFF00_0000) as i32
        } else {
            value as i32
        }
    }

    fn parse_push(&mut self, b: [u8; 3]) -> Result<PushValue> {
        let int16 = get_u16(b) as i16;
        let data_type = get_type1(b)?;
        self.assert_zero_type2(b)?;

        match data_type {
            DataType::Int16 => Ok(PushValue::Int16(int16)),
            DataType::Int32 => {
                if let Some(&function) = self.function_occurrences.get(&self.cur_pos) {
                    self.cur_pos += 4; // Skip next occurrence offset
                    return Ok(PushValue::Function(function));
                }

                if let Some(&(variable, _)) = self.variable_occurrences.get(&self.cur_pos) {
                    self.cur_pos += 4; // Skip next occurrence offset
                    return Ok(PushValue::Variable(CodeVariable {
                        variable,
                        variable_type: VariableType::Normal,
                        instance_type: InstanceType::Self_,
                        is_int32: true,
                    }));
                }

                self.read_i32().map(PushValue::Int32)
            },
            DataType::Int64 => self.read_i64().map(PushValue::Int64),
            DataType::Double => self.read_f64().map(PushValue::Double),
            DataType::Boolean => self.read_bool32().map(PushValue::Boolean),
            DataType::String => {
                let index = self.read_u32()? as usize;
                let len = self.strings.len();
                let string = self
                    .strings
                    .get(index)
                    .ok_or_else(|| format!("String ID is out of range: {index} >= {len}"))?;
                Ok(PushValue::String(string.clone()))
            },
            DataType::Variable => read_variable(self, int16).map(PushValue::Variable),
        }
    }

    fn parse_push_var(&mut self, b: [u8; 3]) -> Result<CodeVariable> {
        let raw_instance_type = get_u16(b) as i16;
        let data_type: DataType = get_type1(b)?;
        self.assert_zero_type2(b)?;
        self.assert_type(DataType::Variable, data_type)?;

        read_variable(self, raw_instance_type)
    }

    fn parse_pushim(&self, b: [u8; 3]) -> Result<i16> {
        let integer = get_u16(b) as i16;
        let data_type = get_type1(b)?;
        self.assert_zero_type2(b)?;
        self.assert_type(DataType::Int16, data_type)?;

        Ok(integer)
    }

    fn parse_call(&mut self, b: [u8; 3]) -> Result<Instruction> {
        let argument_count: u16 = get_u16(b);
        let data_type: DataType = get_type1(b)?;
        self.assert_zero_type2(b)?;
        self.assert_type(DataType::Int32, data_type)?;

        let function: GMRef<GMFunction> = *self
            .function_occurrences
            .get(&(self.cur_pos))
            .ok_or_else(|| {
                format!(
                    "Could not find any function with absolute occurrence position {} in map with length {} while parsing Call Instruction",
                    self.cur_pos,
                    self.function_occurrences.len(),
                )
            })?;
        self.cur_pos += 4; // Skip next occurrence offset

        Ok(Instruction::Call { function, argument_count })
    }

    fn parse_callvar(&self, b: [u8; 3]) -> Result<u16> {
        let argument_count: u16 = get_u16(b);
        let data_type: DataType = get_type1(b)?;
        self.assert_zero_type2(b)?;
        self.assert_type(DataType::Variable, data_type)?;

        Ok(argument_count)
    }

    fn parse_extended(&mut self, b: [u8; 3]) -> Result<Instruction> {
        use DataType::{Int16, Int32};
        #[allow(clippy::wildcard_imports)]
        use opcodes::extended::*;

        let kind = get_u16(b) as i16;
        let data_type: DataType = num_enum_from(b[2] & 0xF)?;
        self.assert_zero_type2(b)?;

        let instruction = match (data_type, kind) {
            (Int16, CHKINDEX) => Instruction::CheckArrayIndex,
            (Int16, PUSHAF) => Instruction::PushArrayFinal,
            (Int16, POPAF) => Instruction::PopArrayFinal,
            (Int16, PUSHAC) => Instruction::PushArrayContainer,
            (Int16, SETOWNER) => Instruction::SetArrayOwner,
            (Int16, ISSTATICOK) => Instruction::HasStaticInitialized,
            (Int16, SETSTATIC) => Instruction::SetStaticInitialized,
            (Int16, SAVEAREF) => Instruction::SaveArrayReference,
            (Int16, RESTOREAREF) => Instruction::RestoreArrayReference,
            (Int16, ISNULLISH) => Instruction::IsNullishValue,
            (Int32, PUSHREF) => {
                let asset_reference = AssetReference::deserialize(self)
                    .context("parsing PushReference Extended Instruction")?;
                Instruction::PushReference { asset_reference }
            },
            _ => bail!("Invalid Extended Instruction with data type {data_type:?} and kind {kind}"),
        };

        Ok(instruction)
    }
}

















impl GMElement for AssetReference {
    fn deserialize(reader: &mut DataReader) -> Result<Self> {
        let raw = reader.read_u32()?;
        Self::parse(raw)
    }
}

fn read_variable(reader: &mut DataReader, raw_instance_type: i16) -> Result<CodeVariable> {
    let occurrence_position: u32 = reader.cur_pos;
    let raw_value = reader.read_u32()?;

    let (variable, vari_instance_type): (GMRef<GMVariable>, InstanceType) = *reader
        .variable_occurrences
        .get(&occurrence_position)
        .ok_or_else(|| {
            format!("Could not find variable with occurrence position {occurrence_position}")
        })?;

    let variable_type = (raw_value >> 24) & 0xF8;
    let variable_type: VariableType =
        num_enum_from(variable_type as u8).context("parsing variable reference chain")?;

    let instance_type: InstanceType =
        if matches!(variable_type, VariableType::Normal | VariableType::Instance) {
            InstanceType::parse(raw_instance_type, variable_type)?
        } else {
            vari_instance_type
        };

    Ok(CodeVariable {
        variable,
        variable_type,
        instance_type,
        is_int32: false,
    })
}



/// Check whether this data file was generated with `YYC` (`YoYoGames Compiler`).
/// Should that be the case, the `CODE`, `VARI` and `FUNC` chunks will be empty
/// (or not exist, depending on the WAD version).
/// NOTE: YYC is untested. Issues may occur.
pub(crate) fn check_yyc(reader: &DataReader) -> Result<bool> {
    // If the CODE chunk doesn't exist; the data file was compiled with YYC.
    let Some(code) = reader.chunks.get("CODE") else {
        if reader.chunks.contains("VARI") {
            bail!("Chunk VARI exists but CODE doesn't");
        }

        if reader.chunks.contains("FUNC") {
            bail!("Chunk FUNC exists but CODE and VARI don't");
        }

        return Ok(true);
    };

    let vari = reader
        .chunks
        .get("VARI")
        .ok_or("Chunk CODE exists but VARI doesn't")?;

    let func = reader
        .chunks
        .get("FUNC")
        .ok_or("Chunk CODE and VARI exist but FUNC doesn't")?;

    // If the CODE chunk exists but is completely empty,
    // the data file was compiled with YYC before WAD 17.
    if !code.is_empty() {
        return Ok(false);
    }

    if reader.general_info.bytecode_version > 16 {
        log::warn!("Empty, but existent CODE chunk after WAD 16");
    }

    if !vari.is_empty() {
        bail!("Chunk CODE is empty but VARI is not");
    }

    if !func.is_empty() {
        bail!("Chunk CODE and VARI are empty but FUNC is not");
    }

    Ok(true)
}

#[cfg(test)]
mod tests {
    use crate::gamemaker::deserialize::reader::DataReader;
    use crate::gamemaker::reference::GMRef;
    use crate::gml::instruction::{Instruction, PushValue};
    use crate::gml::opcodes;

    fn word(opcode: u8, b2: u8, b1: u8, b0: u8) -> [u8; 4] {
        [b0, b1, b2, opcode]
    }

    /// Branch offsets are a 23-bit signed word count; `bytecode_version > 14` also folds
    /// bit 22 into the sign, effectively sign-extending from bit 22 instead of bit 23.
    #[test]
    fn branch_offset_sign_extends_from_bit_22() {
        let cases: [(u32, i32); 3] = [
            (0x007F_FFFF, -1),
            (0x0040_0000, -(1 << 22)),
            (0x003F_FFFF, (1 << 22) - 1),
        ];

        for (low24, expected) in cases {
            let b2 = (low24 >> 16) as u8;
            let b1 = (low24 >> 8) as u8;
            let b0 = low24 as u8;
            let buf = word(opcodes::JMP, b2, b1, b0);

            let mut reader = DataReader::new(&buf);
            assert!(reader.general_info.bytecode_version > 14);

            let instruction = Instruction::deserialize(&mut reader).unwrap();
            match instruction {
                Instruction::Branch { jump_offset } => assert_eq!(jump_offset, expected),
                other => panic!("expected Branch instruction, got {other:?}"),
            }
        }
    }

    /// `Push` with data type `Double` reads 8 more bytes as a little-endian `f64`.
    #[test]
    fn push_double_reads_following_f64() {
        let mut buf = word(opcodes::PUSH, 0x00, 0x00, 0x00).to_vec();
        buf.extend_from_slice(&std::f64::consts::PI.to_le_bytes());

        let mut reader = DataReader::new(&buf);
        let instruction = Instruction::deserialize(&mut reader).unwrap();
        match instruction {
            Instruction::Push { value: PushValue::Double(value) } => {
                assert_eq!(value, std::f64::consts::PI);
            },
            other => panic!("expected Push(Double) instruction, got {other:?}"),
        }
    }

    /// `Call` resolves its function through the occurrence map populated while parsing `FUNC`,
    /// then skips the 4-byte occurrence-chain slot that follows the instruction word.
    #[test]
    fn call_resolves_function_occurrence() {
        let argument_count: u16 = 3;
        let mut buf = word(opcodes::CALL, 0x02, (argument_count >> 8) as u8, argument_count as u8).to_vec();
        buf.extend_from_slice(&[0u8; 4]); // occurrence-chain slot, never read directly

        let mut reader = DataReader::new(&buf);
        reader.function_occurrences.insert(4, GMRef::new(7));

        let instruction = Instruction::deserialize(&mut reader).unwrap();
        match instruction {
            Instruction::Call { function, argument_count: actual_count } => {
                assert_eq!(function, GMRef::new(7));
                assert_eq!(actual_count, argument_count);
            },
            other => panic!("expected Call instruction, got {other:?}"),
        }
    }

    /// A shared-blob child entry reports its own `(offset, length)` slice, not the parent's.
    #[test]
    fn code_entry_byte_range_reflects_shared_blob_child() {
        use crate::gamemaker::elements::code::{GMCode, GMCodes, ModernData};

        let parent = GMCode {
            name: "gml_Script_parent".to_string(),
            instructions: vec![],
            modern_data: Some(ModernData {
                locals_count: 0,
                arguments_count: 0,
                weird_local_flag: false,
                offset: 0,
                parent: None,
            }),
            instruction_byte_length: 16,
        };
        let child = GMCode {
            name: "gml_Script_child".to_string(),
            instructions: vec![],
            modern_data: Some(ModernData {
                locals_count: 0,
                arguments_count: 0,
                weird_local_flag: false,
                offset: 16,
                parent: Some(GMRef::new(0)),
            }),
            instruction_byte_length: 12,
        };
        let codes = GMCodes { codes: vec![parent, child], exists: true };

        assert_eq!(codes.code_entry_byte_range(&codes.codes[0]), (0, 16));
        assert_eq!(codes.code_entry_byte_range(&codes.codes[1]), (16, 12));
    }

    #[test]
    fn unknown_opcode_is_reported_not_fatal() {
        let buf = word(0x01, 0x00, 0x00, 0x00);
        let mut reader = DataReader::new(&buf);
        let instruction = Instruction::deserialize(&mut reader).unwrap();
        match instruction {
            Instruction::Unknown { raw } => assert_eq!(raw, 0x01),
            other => panic!("expected Unknown instruction, got {other:?}"),
        }
    }
}
