/*!
# `CLEAR`

## Purpose
Removes every variable.

## Remarks
The program is untouched. Outstanding `GOSUB` returns and the
`READ` position are forgotten and `CONT` has nowhere to continue.

## Example
```text
A=5
CLEAR
PRINT A
2/0
```

*/
