/*!
# `REM <any text>`

## Purpose
A remark for whoever reads the program.

## Remarks
Everything after `REM` is kept as typed.

## Example
```text
10 REM THIS IS IGNORED
```

*/
