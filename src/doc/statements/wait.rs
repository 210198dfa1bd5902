/*!
# `WAIT <milliseconds>`

## Purpose
Pauses the program.

## Remarks
Break is checked every 20 milliseconds.

## Example
```text
10 PRINT TIME
20 WAIT 2000
30 PRINT TIME
```

*/
