/*!
# `CLS`

## Purpose
Clears the display.

## Remarks
The next `PRINT` starts at the top left.

## Example
```text
10 CLS
20 PRINT AT 10,12;"CENTRE"
```

*/
